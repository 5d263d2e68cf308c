use crate::bundle::Bundle;
use crate::remote::{OnceListenerCallback, RemoteCallback};
use crate::view::{AppContext, SourceView};
use image::RgbaImage;
use log::debug;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub const KEY_PACKAGE_NAME: &str = "launch:packageName";
pub const KEY_ANIM_TYPE: &str = "launch:animType";
pub const KEY_ANIM_ENTER_RES_ID: &str = "launch:animEnterRes";
pub const KEY_ANIM_EXIT_RES_ID: &str = "launch:animExitRes";
pub const KEY_ANIM_THUMBNAIL: &str = "launch:animThumbnail";
pub const KEY_ANIM_START_X: &str = "launch:animStartX";
pub const KEY_ANIM_START_Y: &str = "launch:animStartY";
pub const KEY_ANIM_START_LISTENER: &str = "launch:animStartListener";

/// Discriminator used for the serialized form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransitionKind {
    None = 0,
    Custom = 1,
    Thumbnail = 2,
}

impl TransitionKind {
    pub fn from_i32(kind: i32) -> Option<TransitionKind> {
        match kind {
            0 => Some(TransitionKind::None),
            1 => Some(TransitionKind::Custom),
            2 => Some(TransitionKind::Thumbnail),
            _ => None,
        }
    }

    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

/// The transition animation an options instance describes.
///
/// Fields belonging to one strategy cannot coexist with another's.
#[derive(Clone)]
pub enum TransitionAnimation {
    None,
    /// Animation resources to run for the incoming and outgoing windows.
    /// An id of 0 means no animation for that side; ids are passed through
    /// to the host renderer unvalidated.
    Custom { enter_res_id: i32, exit_res_id: i32 },
    /// A thumbnail scaled up from a start position to the incoming window.
    Thumbnail {
        thumbnail: Option<Arc<RgbaImage>>,
        start_x: i32,
        start_y: i32,
        started_callback: Option<Arc<dyn RemoteCallback>>,
    },
}

impl TransitionAnimation {
    pub fn kind(&self) -> TransitionKind {
        match self {
            TransitionAnimation::None => TransitionKind::None,
            TransitionAnimation::Custom { .. } => TransitionKind::Custom,
            TransitionAnimation::Thumbnail { .. } => TransitionKind::Thumbnail,
        }
    }
}

impl Debug for TransitionAnimation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionAnimation::None => f.write_str("None"),
            TransitionAnimation::Custom {
                enter_res_id,
                exit_res_id,
            } => write!(f, "Custom({}, {})", enter_res_id, exit_res_id),
            TransitionAnimation::Thumbnail {
                thumbnail,
                start_x,
                start_y,
                started_callback,
            } => write!(
                f,
                "Thumbnail({:?}, {}, {}, listener={})",
                thumbnail.as_ref().map(|t| (t.width(), t.height())),
                start_x,
                start_y,
                started_callback.is_some(),
            ),
        }
    }
}

/// Options describing which transition animation to play when a window
/// launch runs, carried to the launch path as a [`Bundle`].
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    origin_package: Option<String>,
    animation: TransitionAnimation,
}

impl LaunchOptions {
    /// Options specifying a custom animation to run when the new window is
    /// displayed.
    ///
    /// `context` is the application the animation resources are loaded
    /// from. Use 0 for `enter_res_id` or `exit_res_id` to run no animation
    /// for that side.
    pub fn make_custom_animation(
        context: &dyn AppContext,
        enter_res_id: i32,
        exit_res_id: i32,
    ) -> LaunchOptions {
        LaunchOptions {
            origin_package: Some(context.package_name()),
            animation: TransitionAnimation::Custom {
                enter_res_id,
                exit_res_id,
            },
        }
    }

    /// Options specifying an animation where a thumbnail is scaled from a
    /// position, given relative to `source`, to the new window.
    pub fn make_thumbnail_scale_up_animation(
        source: &dyn SourceView,
        thumbnail: Arc<RgbaImage>,
        start_x: i32,
        start_y: i32,
    ) -> LaunchOptions {
        Self::make_thumbnail_scale_up_animation_with_listener(
            source, thumbnail, start_x, start_y, None,
        )
    }

    /// Like [`Self::make_thumbnail_scale_up_animation`], with a listener
    /// notified when the animation starts running. If the animation is
    /// never executed, the notification happens immediately instead. The
    /// listener runs on the execution context owning `source`, and is
    /// notified exactly once either way.
    pub fn make_thumbnail_scale_up_animation_with_listener(
        source: &dyn SourceView,
        thumbnail: Arc<RgbaImage>,
        start_x: i32,
        start_y: i32,
        listener: Option<Box<dyn FnOnce() + Send + 'static>>,
    ) -> LaunchOptions {
        let location = source.location_on_screen();
        let started_callback = listener.map(|listener| {
            OnceListenerCallback::wrap(source.execution_context(), listener)
                as Arc<dyn RemoteCallback>
        });
        LaunchOptions {
            origin_package: Some(source.app_context().package_name()),
            animation: TransitionAnimation::Thumbnail {
                thumbnail: Some(thumbnail),
                start_x: location.x + start_x,
                start_y: location.y + start_y,
                started_callback,
            },
        }
    }

    /// Rebuilds options from a received bundle. Total over partial or
    /// malformed input: missing integers read as 0, an unrecognized kind
    /// reads as no animation.
    pub fn from_bundle(bundle: &Bundle) -> LaunchOptions {
        let origin_package = bundle.get_str(KEY_PACKAGE_NAME).map(|s| s.to_string());
        let kind = TransitionKind::from_i32(bundle.get_int(KEY_ANIM_TYPE, 0))
            .unwrap_or(TransitionKind::None);
        let animation = match kind {
            TransitionKind::None => TransitionAnimation::None,
            TransitionKind::Custom => TransitionAnimation::Custom {
                enter_res_id: bundle.get_int(KEY_ANIM_ENTER_RES_ID, 0),
                exit_res_id: bundle.get_int(KEY_ANIM_EXIT_RES_ID, 0),
            },
            TransitionKind::Thumbnail => TransitionAnimation::Thumbnail {
                thumbnail: bundle.get_image(KEY_ANIM_THUMBNAIL),
                start_x: bundle.get_int(KEY_ANIM_START_X, 0),
                start_y: bundle.get_int(KEY_ANIM_START_Y, 0),
                started_callback: bundle.get_callback(KEY_ANIM_START_LISTENER),
            },
        };
        LaunchOptions {
            origin_package,
            animation,
        }
    }

    pub fn origin_package(&self) -> Option<&str> {
        self.origin_package.as_deref()
    }

    pub fn animation(&self) -> &TransitionAnimation {
        &self.animation
    }

    pub fn kind(&self) -> TransitionKind {
        self.animation.kind()
    }

    pub fn custom_enter_res_id(&self) -> i32 {
        match &self.animation {
            TransitionAnimation::Custom { enter_res_id, .. } => *enter_res_id,
            _ => 0,
        }
    }

    pub fn custom_exit_res_id(&self) -> i32 {
        match &self.animation {
            TransitionAnimation::Custom { exit_res_id, .. } => *exit_res_id,
            _ => 0,
        }
    }

    pub fn thumbnail(&self) -> Option<Arc<RgbaImage>> {
        match &self.animation {
            TransitionAnimation::Thumbnail { thumbnail, .. } => thumbnail.clone(),
            _ => None,
        }
    }

    pub fn start_x(&self) -> i32 {
        match &self.animation {
            TransitionAnimation::Thumbnail { start_x, .. } => *start_x,
            _ => 0,
        }
    }

    pub fn start_y(&self) -> i32 {
        match &self.animation {
            TransitionAnimation::Thumbnail { start_y, .. } => *start_y,
            _ => 0,
        }
    }

    pub fn started_callback(&self) -> Option<Arc<dyn RemoteCallback>> {
        match &self.animation {
            TransitionAnimation::Thumbnail {
                started_callback, ..
            } => started_callback.clone(),
            _ => None,
        }
    }

    /// Overlays the values of `other` onto this instance. Values defined in
    /// `other` replace those in the base options.
    pub fn join(&mut self, other: &LaunchOptions) {
        if let Some(package) = &other.origin_package {
            self.origin_package = Some(package.clone());
        }
        match &other.animation {
            TransitionAnimation::Custom {
                enter_res_id,
                exit_res_id,
            } => {
                // Replaces any thumbnail state. A callback the old options
                // carried is abandoned without being notified.
                self.animation = TransitionAnimation::Custom {
                    enter_res_id: *enter_res_id,
                    exit_res_id: *exit_res_id,
                };
            }
            TransitionAnimation::Thumbnail {
                thumbnail,
                start_x,
                start_y,
                started_callback,
            } => {
                // The incoming options lose their reservation of the
                // transition; their caller is told right away.
                if let Some(callback) = started_callback {
                    if let Err(e) = callback.send_result(None) {
                        debug!("failed to notify superseded start listener: {}", e);
                    }
                }
                self.animation = TransitionAnimation::Thumbnail {
                    thumbnail: thumbnail.clone(),
                    start_x: *start_x,
                    start_y: *start_y,
                    started_callback: started_callback.clone(),
                };
            }
            TransitionAnimation::None => {}
        }
    }

    /// Tells the start listener, if any, that no animation will run.
    /// Best-effort: a failed delivery is swallowed.
    pub fn abort(&self) {
        if let TransitionAnimation::Thumbnail {
            started_callback: Some(callback),
            ..
        } = &self.animation
        {
            if let Err(e) = callback.send_result(None) {
                debug!("failed to notify start listener on abort: {}", e);
            }
        }
    }

    /// Aborts options still in their bundle form.
    pub fn abort_bundle(bundle: &Bundle) {
        LaunchOptions::from_bundle(bundle).abort();
    }

    /// Returns the options as a bundle that can be handed to the launch
    /// path.
    pub fn to_bundle(&self) -> Bundle {
        let mut bundle = Bundle::new();
        if let Some(package) = &self.origin_package {
            bundle.put_str(KEY_PACKAGE_NAME, package);
        }
        match &self.animation {
            TransitionAnimation::None => {}
            TransitionAnimation::Custom {
                enter_res_id,
                exit_res_id,
            } => {
                bundle.put_int(KEY_ANIM_TYPE, TransitionKind::Custom.to_i32());
                bundle.put_int(KEY_ANIM_ENTER_RES_ID, *enter_res_id);
                bundle.put_int(KEY_ANIM_EXIT_RES_ID, *exit_res_id);
            }
            TransitionAnimation::Thumbnail {
                thumbnail,
                start_x,
                start_y,
                started_callback,
            } => {
                bundle.put_int(KEY_ANIM_TYPE, TransitionKind::Thumbnail.to_i32());
                if let Some(thumbnail) = thumbnail {
                    bundle.put_image(KEY_ANIM_THUMBNAIL, thumbnail.clone());
                }
                bundle.put_int(KEY_ANIM_START_X, *start_x);
                bundle.put_int(KEY_ANIM_START_Y, *start_y);
                bundle.put_callback(KEY_ANIM_START_LISTENER, started_callback.clone());
            }
        }
        bundle
    }
}
