//! The gradient wave component.
//!
//! [`GradientWave`] owns the percent animator, the wave constants, the mask
//! size and the fill gradient. It is a plain value: the host forwards frames
//! to it and asks it for the clip path, through the [`WaveSurface`]
//! contract, and paints [`GradientWave::gradient`] inside that path.

use glam::DVec2;
use web_time::Instant;

use crate::animation::{AnimationState, PercentAnimator};
use crate::color::{LinearGradient, Rgba};
use crate::error::WaveError;
use crate::geometry::{self, WavePath};
use crate::mask::{MaskImage, MaskProvider};
use crate::options::{Options, WaveConfig, WaveDirection};
use crate::scheduler::{FrameScheduler, FrameTick, Subscription};

/// Capability a host rendering surface needs from an animated wave.
pub trait WaveSurface {
    /// Advance one display frame stamped `now`.
    fn on_tick(&mut self, now: Instant);
    /// Closed fill region for the current frame, in view coordinates.
    fn render_path(&self) -> WavePath;
}

/// Axis-aligned view rectangle in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: DVec2,
    /// Width and height.
    pub size: DVec2,
}

impl Rect {
    /// Rectangle of `size` centered on `center`.
    #[must_use]
    pub fn centered(center: DVec2, size: DVec2) -> Self {
        Self {
            origin: center - size / 2.0,
            size,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }
}

/// A masked, gradient-filled wave whose fill level tracks a percent.
#[derive(Debug)]
pub struct GradientWave {
    frame: Rect,
    mask: MaskImage,
    config: WaveConfig,
    animator: PercentAnimator,
    gradient: LinearGradient,
    subscription: Option<Subscription>,
}

impl GradientWave {
    /// Wave sized to the named mask and centered on `center`, with default
    /// constants travelling in `direction`.
    pub fn new(
        center: DVec2,
        direction: WaveDirection,
        mask_name: &str,
        start_color: Rgba,
        end_color: Rgba,
        masks: &(impl MaskProvider + ?Sized),
    ) -> Result<Self, WaveError> {
        Self::with_config(
            center,
            WaveConfig::with_direction(direction),
            mask_name,
            start_color,
            end_color,
            masks,
        )
    }

    /// Wave with explicit constants.
    ///
    /// Fails with [`WaveError::AssetNotFound`] if the mask is unknown,
    /// [`WaveError::InvalidMask`] if it has no area, and
    /// [`WaveError::InvalidConfig`] if `config` does not validate.
    pub fn with_config(
        center: DVec2,
        config: WaveConfig,
        mask_name: &str,
        start_color: Rgba,
        end_color: Rgba,
        masks: &(impl MaskProvider + ?Sized),
    ) -> Result<Self, WaveError> {
        config.validate()?;

        let Some(mask) = masks.mask(mask_name) else {
            log::warn!("mask asset {mask_name:?} not found");
            return Err(WaveError::AssetNotFound(mask_name.to_owned()));
        };
        if !mask.has_area() {
            return Err(WaveError::InvalidMask(format!(
                "{mask_name} is {}x{}",
                mask.size.x, mask.size.y
            )));
        }

        let frame = Rect::centered(center, mask.size);
        let gradient = LinearGradient::vertical(
            start_color,
            end_color,
            frame.width(),
            frame.height(),
        );

        Ok(Self {
            frame,
            mask,
            animator: PercentAnimator::new(&config),
            config,
            gradient,
            subscription: None,
        })
    }

    /// Wave configured from an options preset.
    pub fn from_options(
        center: DVec2,
        options: &Options,
        mask_name: &str,
        masks: &(impl MaskProvider + ?Sized),
    ) -> Result<Self, WaveError> {
        let mut wave = Self::with_config(
            center,
            options.wave.clone(),
            mask_name,
            options.gradient.start(),
            options.gradient.end(),
            masks,
        )?;
        wave.gradient = wave
            .gradient
            .with_locations(0.0, options.gradient.end_location);
        Ok(wave)
    }

    /// Displayed percent, rounded.
    #[must_use]
    pub fn percent(&self) -> i32 {
        self.animator.display_percent()
    }

    /// Animate toward `percent` (clamped to [0, 100]).
    pub fn set_percent(&mut self, percent: i32) {
        self.animator.set_target(percent);
    }

    /// Begin receiving frames from `scheduler`. Returns `false` if already
    /// running.
    pub fn start(&mut self, scheduler: &impl FrameScheduler) -> bool {
        if self.is_running() {
            return false;
        }
        self.subscription = Some(scheduler.subscribe());
        true
    }

    /// Stop receiving frames. Returns `false` if not running.
    pub fn stop(&mut self) -> bool {
        self.subscription
            .take()
            .is_some_and(|mut sub| sub.cancel())
    }

    /// Whether the wave holds an active frame subscription.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Tick if this wave's subscription fires on `tick`.
    pub fn handle_frame(&mut self, tick: &FrameTick) -> bool {
        let fires = self
            .subscription
            .as_ref()
            .is_some_and(|sub| tick.fires(sub));
        if fires {
            self.on_tick(tick.timestamp);
        }
        fires
    }

    /// Move the wave so its center is at `center`.
    pub fn set_center(&mut self, center: DVec2) {
        self.frame = Rect::centered(center, self.frame.size);
    }

    /// View rectangle in host coordinates.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Mask the view is sized to.
    #[must_use]
    pub fn mask(&self) -> &MaskImage {
        &self.mask
    }

    /// Wave constants.
    #[must_use]
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Animation state.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        self.animator.state()
    }

    /// Whether the percent is still morphing toward its target.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Gradient painted inside the wave path.
    #[must_use]
    pub fn gradient(&self) -> &LinearGradient {
        &self.gradient
    }
}

impl WaveSurface for GradientWave {
    fn on_tick(&mut self, now: Instant) {
        self.animator.tick(now);
    }

    fn render_path(&self) -> WavePath {
        let width = self.frame.width();
        let height = self.frame.height();
        geometry::generate(
            width,
            height,
            width / 2.0,
            self.animator.state(),
            &self.config,
        )
    }
}
