use glam::Vec3;
use std::time::Duration;

use crate::gradient::GradientStops;
use crate::layout::{item_transform, ItemTransform};
use crate::tween::{Easing, Tween};

/// Animated transform of one rendered item (position, scale and rotation tween independently).
#[derive(Clone, Debug)]
pub struct ItemTween {
    position: Tween<Vec3>,
    scale: Tween<f32>,
    rotation: Tween<Vec3>,
}

impl ItemTween {
    fn at_rest(t: ItemTransform, easing: Easing) -> Self {
        Self {
            position: Tween::settled(t.position, easing),
            scale: Tween::settled(t.scale, easing),
            rotation: Tween::settled(t.rotation, easing),
        }
    }

    fn retarget(&mut self, t: ItemTransform, duration: Duration) {
        self.position.retarget(t.position, duration);
        self.scale.retarget(t.scale, duration);
        self.rotation.retarget(t.rotation, duration);
    }

    fn step(&mut self, dt_sec: f32) {
        self.position.step(dt_sec);
        self.scale.step(dt_sec);
        self.rotation.step(dt_sec);
    }

    pub fn current(&self) -> ItemTransform {
        ItemTransform {
            position: self.position.value(),
            scale: self.scale.value(),
            rotation: self.rotation.value(),
        }
    }

    pub fn target(&self) -> ItemTransform {
        ItemTransform {
            position: self.position.target(),
            scale: self.scale.target(),
            rotation: self.rotation.target(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position.is_finished() && self.scale.is_finished() && self.rotation.is_finished()
    }
}

/// Per-item animation handles, addressed by item index.
///
/// The handle list always has exactly `count` entries; `resize` rebuilds it
/// whenever the item count changes.
#[derive(Clone, Debug)]
pub struct ItemAnimator {
    items: Vec<ItemTween>,
    duration: Duration,
    easing: Easing,
}

impl ItemAnimator {
    /// All items start at rest on their targets.
    pub fn new(count: usize, current: usize, spacing: f32, duration: Duration) -> Self {
        let easing = Easing::default();
        let items = (0..count)
            .map(|i| ItemTween::at_rest(item_transform(i, current, spacing), easing))
            .collect();
        Self {
            items,
            duration,
            easing,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Point every item at its new target, overwriting in-flight tweens.
    pub fn retarget(&mut self, current: usize, spacing: f32) {
        let duration = self.duration;
        for (i, item) in self.items.iter_mut().enumerate() {
            item.retarget(item_transform(i, current, spacing), duration);
        }
    }

    /// Match a new item count. Surviving items keep their animation state,
    /// new ones appear at rest on their target, removed ones are dropped.
    pub fn resize(&mut self, count: usize, current: usize, spacing: f32) {
        let easing = self.easing;
        if count < self.items.len() {
            self.items.truncate(count);
        } else {
            let start = self.items.len();
            self.items.extend(
                (start..count).map(|i| ItemTween::at_rest(item_transform(i, current, spacing), easing)),
            );
        }
    }

    pub fn step(&mut self, dt_sec: f32) {
        for item in &mut self.items {
            item.step(dt_sec);
        }
    }

    pub fn get(&self, index: usize) -> Option<&ItemTween> {
        self.items.get(index)
    }

    pub fn transforms(&self) -> Vec<ItemTransform> {
        self.items.iter().map(ItemTween::current).collect()
    }

    pub fn is_animating(&self) -> bool {
        self.items.iter().any(|i| !i.is_finished())
    }
}

/// Animated page background.
#[derive(Clone, Debug)]
pub struct BackgroundAnimator {
    stops: Tween<GradientStops>,
    duration: Duration,
}

impl BackgroundAnimator {
    pub fn new(current: usize, duration: Duration) -> Self {
        Self {
            stops: Tween::settled(GradientStops::for_index(current), Easing::default()),
            duration,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn retarget(&mut self, current: usize) {
        self.stops
            .retarget(GradientStops::for_index(current), self.duration);
    }

    pub fn step(&mut self, dt_sec: f32) -> GradientStops {
        self.stops.step(dt_sec)
    }

    pub fn current(&self) -> GradientStops {
        self.stops.value()
    }

    pub fn css(&self) -> String {
        self.stops.value().to_css()
    }

    pub fn is_animating(&self) -> bool {
        !self.stops.is_finished()
    }
}
