use crate::base::Point;
use crate::task_executor::ExecutionContext;
use std::sync::Arc;

/// The application context an options instance is created on behalf of.
pub trait AppContext {
    /// Identifier of the package that created the options. Animation
    /// resources referenced by id are loaded from this package.
    fn package_name(&self) -> String;
}

/// The view a thumbnail animation starts from.
///
/// The view defines the coordinate space for the animation's start offsets
/// and owns the execution context that start notifications are delivered on.
pub trait SourceView {
    fn app_context(&self) -> Arc<dyn AppContext>;

    /// Current location of the view's origin in screen coordinates.
    fn location_on_screen(&self) -> Point;

    fn execution_context(&self) -> Arc<dyn ExecutionContext>;
}
