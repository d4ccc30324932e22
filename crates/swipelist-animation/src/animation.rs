//! Row transforms, easing curves and tween directives.

use std::f32::consts::PI;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions applied to the linear progress of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Starts and ends slowly, fastest in the middle. This is the curve the
    /// platform applies to view animations that do not name an interpolator.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::AccelerateDecelerate => ((fraction + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// Transient visual transform of a row: horizontal offset and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowTransform {
    /// Horizontal translation in pixels, positive to the right.
    pub translation_x: f32,
    /// Opacity multiplier in [0, 1].
    pub alpha: f32,
}

impl RowTransform {
    /// No translation, fully opaque.
    pub const IDENTITY: RowTransform = RowTransform {
        translation_x: 0.0,
        alpha: 1.0,
    };

    pub const fn new(translation_x: f32, alpha: f32) -> Self {
        Self {
            translation_x,
            alpha,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for RowTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for RowTransform {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            translation_x: self.translation_x.lerp(&target.translation_x, fraction),
            alpha: self.alpha.lerp(&target.alpha, fraction),
        }
    }
}

/// A directive moving one row from `from` to `to`.
///
/// With `fill_after` the row keeps the `to` transform once the directive ends;
/// without it the row reverts to [`RowTransform::IDENTITY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowAnimation {
    pub from: RowTransform,
    pub to: RowTransform,
    /// Duration in (fractional) milliseconds. Zero applies `to` immediately.
    pub duration_millis: f32,
    pub easing: Easing,
    pub fill_after: bool,
}

impl RowAnimation {
    /// Interpolates between two transforms, holding the end state.
    pub fn tween(from: RowTransform, to: RowTransform, duration_millis: f32) -> Self {
        Self {
            from,
            to,
            duration_millis: duration_millis.max(0.0),
            easing: Easing::default(),
            fill_after: true,
        }
    }

    /// Jumps straight to `to` and holds it.
    pub fn snap(to: RowTransform) -> Self {
        Self::tween(to, to, 0.0)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_fill_after(mut self, fill_after: bool) -> Self {
        self.fill_after = fill_after;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration_millis <= 0.0
    }

    /// Linear progress after `elapsed_millis`, clamped to [0, 1].
    pub fn progress_at(&self, elapsed_millis: f32) -> f32 {
        if self.is_instant() {
            1.0
        } else {
            (elapsed_millis / self.duration_millis).clamp(0.0, 1.0)
        }
    }

    /// Transform shown after `elapsed_millis`.
    pub fn value_at(&self, elapsed_millis: f32) -> RowTransform {
        let progress = self.progress_at(elapsed_millis);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.transform(progress))
    }

    /// Transform the row settles on once the directive has finished.
    pub fn settled_value(&self) -> RowTransform {
        if self.fill_after {
            self.to
        } else {
            RowTransform::IDENTITY
        }
    }
}
