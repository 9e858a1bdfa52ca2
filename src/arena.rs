//! Slot arena with a free list.
//!
//! Nodes and blocks live in arenas and refer to each other by `Idx` rather
//! than by pointer. A freed slot is pushed onto the free list and handed out
//! again by the next `alloc`, so the arena never shrinks while the list is
//! alive, but it also never holds a stale value: freeing moves the value out.

/// Slot index type. u32 saves space vs usize on 64-bit.
pub type Idx = u32;

/// Null index marker.
pub const NULL: Idx = Idx::MAX;

/// Convert a slot position to an `Idx`. `NULL` and anything wider than
/// `Idx` cannot address a slot, so running out of indices is fatal.
fn slot_index(position: usize) -> Idx {
    match Idx::try_from(position) {
        Ok(idx) if idx != NULL => idx,
        _ => panic!("arena exhausted: no index left for slot {}", position),
    }
}

enum Slot<N> {
    Occupied(N),
    Vacant,
}

/// A vector of slots addressed by stable indices.
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free_list: Vec<Idx>,
    live: usize,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Store `value`, reusing a freed slot if one is available.
    pub fn alloc(&mut self, value: N) -> Idx {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize] = Slot::Occupied(value);
            idx
        } else {
            let idx = slot_index(self.slots.len());
            self.slots.push(Slot::Occupied(value));
            idx
        };
        self.live += 1;
        idx
    }

    /// Release the slot at `idx`, returning the value it held.
    pub fn free(&mut self, idx: Idx) -> N {
        match std::mem::replace(&mut self.slots[idx as usize], Slot::Vacant) {
            Slot::Occupied(value) => {
                self.free_list.push(idx);
                self.live -= 1;
                value
            }
            Slot::Vacant => panic!("double free of arena slot {}", idx),
        }
    }

    pub fn get(&self, idx: Idx) -> &N {
        match &self.slots[idx as usize] {
            Slot::Occupied(value) => value,
            Slot::Vacant => panic!("use of freed arena slot {}", idx),
        }
    }

    pub fn get_mut(&mut self, idx: Idx) -> &mut N {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(value) => value,
            Slot::Vacant => panic!("use of freed arena slot {}", idx),
        }
    }

    /// Drop every value and forget all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.live = 0;
    }
}

impl<N: Clone> Clone for Arena<N> {
    fn clone(&self) -> Self {
        Arena {
            slots: self
                .slots
                .iter()
                .map(|slot| match slot {
                    Slot::Occupied(value) => Slot::Occupied(value.clone()),
                    Slot::Vacant => Slot::Vacant,
                })
                .collect(),
            free_list: self.free_list.clone(),
            live: self.live,
        }
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}
