// src/level/classifier.rs

use log::warn;
use rayon::prelude::*;

use super::room::{Containment, Room};
use crate::map::Thing;

/// Puts every thing into the first room (in sector order) that contains it.
///
/// Room lookups run in parallel against the read-only room list; the rooms
/// are only mutated afterwards, in thing order. Things that no room contains
/// are logged once each and returned.
pub fn classify_things(rooms: &mut [Room], things: Vec<Thing>, containment: Containment) -> Vec<Thing> {
    let placement: Vec<Option<usize>> = {
        let rooms: &[Room] = rooms;
        things
            .par_iter()
            .map(|thing| {
                rooms
                    .iter()
                    .position(|room| room.contains(thing.x, thing.y, containment))
            })
            .collect()
    };

    let mut unassigned = Vec::new();
    for (thing, slot) in things.into_iter().zip(placement) {
        match slot {
            Some(index) => rooms[index].add_thing(thing),
            None => {
                warn!(
                    "Thing at ({}, {}) of type {} not added to any room.",
                    thing.x, thing.y, thing.thing_type
                );
                unassigned.push(thing);
            }
        }
    }
    unassigned
}
