/// Stage — a collection of objects driven once per frame.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Each object owns a shared transform handle, so other objects can
/// hold it as an anchor.

use std::sync::{Arc, RwLock};
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::time::{Clock, FrameTime};
use crate::transform::{Transform, TransformHandle};
use crate::{dolly_debug, dolly_err, dolly_error};
use super::behaviour::Behaviour;

new_key_type! {
    /// Stable key for an object within a Stage.
    ///
    /// Keys remain valid even after other objects are removed.
    pub struct StageObjectKey;
}

/// A behaviour plus whether its `start` has run.
struct BehaviourSlot {
    behaviour: Box<dyn Behaviour>,
    started: bool,
}

struct StageObject {
    transform: TransformHandle,
    behaviours: Vec<BehaviourSlot>,
    active: bool,
}

/// Objects, their behaviours, and the clock that drives them.
pub struct Stage {
    objects: SlotMap<StageObjectKey, StageObject>,
    clock: Clock,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    /// Create an empty stage with its clock at t = 0
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            clock: Clock::new(),
        }
    }

    // ===== OBJECTS =====

    /// Add an active object with no behaviours.
    pub fn create_object(&mut self, transform: Transform) -> StageObjectKey {
        let key = self.objects.insert(StageObject {
            transform: Arc::new(RwLock::new(transform)),
            behaviours: Vec::new(),
            active: true,
        });
        dolly_debug!("galaxy3d::Stage", "Created object {:?} at {}", key, transform.position());
        key
    }

    /// Remove an object. Returns false if the key is unknown.
    ///
    /// Outstanding transform handles stay readable; weak anchors to the
    /// object expire once the last strong handle is dropped.
    pub fn remove_object(&mut self, key: StageObjectKey) -> bool {
        self.objects.remove(key).is_some()
    }

    /// Shared transform handle of an object.
    pub fn transform(&self, key: StageObjectKey) -> Option<TransformHandle> {
        self.objects.get(key).map(|object| object.transform.clone())
    }

    /// Attach a behaviour to an object. It starts on the next update.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidObject` if the key does not refer to a live object.
    pub fn add_behaviour<B: Behaviour + 'static>(&mut self, key: StageObjectKey, behaviour: B) -> Result<()> {
        let object = self.objects.get_mut(key).ok_or_else(|| {
            dolly_error!("galaxy3d::Stage", "Cannot add behaviour: object {:?} not found", key);
            Error::InvalidObject(format!("Stage object {:?} not found", key))
        })?;

        object.behaviours.push(BehaviourSlot {
            behaviour: Box::new(behaviour),
            started: false,
        });
        Ok(())
    }

    /// Activate or deactivate an object. Returns false if the key is unknown.
    ///
    /// Inactive objects are skipped by `update`. Reactivation does not
    /// run `start` again.
    pub fn set_active(&mut self, key: StageObjectKey, active: bool) -> bool {
        match self.objects.get_mut(key) {
            Some(object) => {
                object.active = active;
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, key: StageObjectKey) -> Option<bool> {
        self.objects.get(key).map(|object| object.active)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    // ===== FRAME =====

    /// Advance the clock by `delta` seconds and update every active object.
    ///
    /// The clock advance is kept even when `update` reports a behaviour
    /// error: the frame happened, only the failing object missed it.
    pub fn tick(&mut self, delta: f32) -> Result<FrameTime> {
        let time = self.clock.advance(delta)?;
        self.update(&time)?;
        Ok(time)
    }

    /// Run one frame at an explicit time, without touching the clock.
    ///
    /// For each active object the transform is copied out, behaviours run
    /// in attach order, and the result is written back. No transform lock
    /// is held while behaviours run, so a behaviour may read any object's
    /// transform (including its own) as an anchor.
    ///
    /// Objects run in stage order. An anchor object that comes later in
    /// that order has not moved yet, so it is seen at its previous-frame
    /// position.
    ///
    /// A failing behaviour stops its own object for this frame: the
    /// object's transform is left as it was and its remaining behaviours
    /// are skipped. Other objects still update, and the first error is
    /// returned once the frame is done.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` without updating anything if
    /// `time.elapsed` is not finite or `time.delta` is negative or not finite.
    pub fn update(&mut self, time: &FrameTime) -> Result<()> {
        if !time.elapsed.is_finite() {
            return Err(dolly_err!("galaxy3d::Stage", "Frame elapsed time must be finite, got {}", time.elapsed));
        }
        if !time.delta.is_finite() || time.delta < 0.0 {
            return Err(dolly_err!("galaxy3d::Stage", "Frame delta must be finite and not negative, got {}", time.delta));
        }

        let mut first_error = None;
        for (key, object) in self.objects.iter_mut() {
            if !object.active || object.behaviours.is_empty() {
                continue;
            }
            if let Err(err) = Self::update_object(key, object, time) {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn update_object(key: StageObjectKey, object: &mut StageObject, time: &FrameTime) -> Result<()> {
        let mut transform = *object.transform.read()
            .map_err(|_| Self::poisoned(key))?;

        for slot in object.behaviours.iter_mut() {
            if !slot.started {
                slot.behaviour.start(&transform).inspect_err(|err| {
                    dolly_error!("galaxy3d::Stage", "Behaviour start failed on {:?}: {}", key, err);
                })?;
                slot.started = true;
            }
            slot.behaviour.update(time, &mut transform).inspect_err(|err| {
                dolly_error!("galaxy3d::Stage", "Behaviour update failed on {:?}: {}", key, err);
            })?;
        }

        *object.transform.write()
            .map_err(|_| Self::poisoned(key))? = transform;
        Ok(())
    }

    fn poisoned(key: StageObjectKey) -> Error {
        dolly_error!("galaxy3d::Stage", "Transform lock poisoned for {:?}", key);
        Error::BackendError(format!("Transform lock poisoned for {:?}", key))
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
