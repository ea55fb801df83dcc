use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::{Fold, Subscription, WeakFold};

/// Keeps a set of folds in sync.
///
/// The first fold is the primary: the others fold and unfold whenever it
/// does. Revealing or hiding the side panel of any member does the same to
/// every other member.
pub struct FoldGroup {
    members: Rc<[WeakFold]>,
    subscriptions: Vec<(WeakFold, Subscription)>,
}

impl FoldGroup {
    pub fn bind(folds: &[Fold]) -> Self {
        let members: Rc<[WeakFold]> = folds.iter().map(Fold::downgrade).collect();
        let mut group = Self {
            members: members.clone(),
            subscriptions: Vec::new(),
        };

        let Some((primary, secondaries)) = folds.split_first() else {
            return group;
        };

        for fold in secondaries {
            let primary = primary.downgrade();
            fold.set_should_fold_func(move || primary.upgrade().is_some_and(|p| p.is_folded()));
        }

        let followers: Vec<WeakFold> = secondaries.iter().map(Fold::downgrade).collect();
        let sub = primary.connect_folded(move |_| {
            for fold in followers.iter().filter_map(WeakFold::upgrade) {
                fold.queue_resize();
            }
        });
        group.subscriptions.push((primary.downgrade(), sub));

        // Hiding one side panel hides all of them. The guard swallows the
        // notifications that propagating the change itself triggers.
        let propagating = Rc::new(Cell::new(false));
        for (i, fold) in folds.iter().enumerate() {
            let members = members.clone();
            let propagating = propagating.clone();
            let sub = fold.connect_revealed(move |revealed| {
                if propagating.replace(true) {
                    return;
                }
                debug!(origin = i, revealed, "propagating fold reveal to group");
                for (j, other) in members.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    if let Some(other) = other.upgrade() {
                        other.set_reveal_side(revealed);
                    }
                }
                propagating.set(false);
            });
            group.subscriptions.push((fold.downgrade(), sub));
        }

        // Secondaries mirror the primary right away.
        for fold in secondaries {
            fold.queue_resize();
        }

        group
    }

    pub fn primary(&self) -> Option<Fold> {
        self.members.first().and_then(WeakFold::upgrade)
    }

    /// The members that are still alive, in binding order.
    pub fn folds(&self) -> impl Iterator<Item = Fold> + '_ {
        self.members.iter().filter_map(WeakFold::upgrade)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Removes the group's observers and gives the secondaries back their
    /// own width-based decision.
    pub fn unbind(self) {
        for (fold, sub) in &self.subscriptions {
            if let Some(fold) = fold.upgrade() {
                fold.disconnect(*sub);
            }
        }
        for fold in self.members.iter().skip(1).filter_map(WeakFold::upgrade) {
            fold.reset_should_fold_func();
            fold.queue_resize();
        }
    }
}
