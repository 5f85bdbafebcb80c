use super::chain::{Chain, Iter, IterMut};
use super::ring::LinkedLoop;
use crate::error::LinkedGeoError;

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// One member of a linked multipolygon
///
/// The first polygon of a chain (the head) is owned by the caller. Every
/// polygon reached through [`LinkedPolygon::next`] is owned by the chain and
/// released by [`LinkedPolygon::destroy`] or when the head is dropped.
#[derive(Debug, Default)]
pub struct LinkedPolygon {
    loops: Chain<LinkedLoop>,
    next: Option<Box<LinkedPolygon>>,
    #[cfg(test)]
    released: Option<Arc<AtomicUsize>>,
}

impl LinkedPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link a new empty polygon after this one and return it
    ///
    /// # Panics
    /// If this polygon already has a successor. Only the last polygon of a
    /// chain may be extended; see [`LinkedPolygon::try_append_polygon`].
    pub fn append_polygon(&mut self) -> &mut LinkedPolygon {
        assert!(
            self.next.is_none(),
            "append_polygon called on a polygon that already has a successor"
        );
        self.next.insert(Box::default()).as_mut()
    }

    /// Checked form of [`LinkedPolygon::append_polygon`]; leaves the chain
    /// untouched on error
    pub fn try_append_polygon(&mut self) -> Result<&mut LinkedPolygon, LinkedGeoError> {
        if self.next.is_some() {
            return Err(LinkedGeoError::PolygonHasSuccessor);
        }
        Ok(self.next.insert(Box::default()).as_mut())
    }

    /// Walk to the last polygon of the chain. O(n) in the number of polygons.
    pub fn last_polygon_mut(&mut self) -> &mut LinkedPolygon {
        let mut current = self;
        loop {
            match current.next {
                Some(ref mut next) => current = next.as_mut(),
                None => return current,
            }
        }
    }

    pub fn next(&self) -> Option<&LinkedPolygon> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut LinkedPolygon> {
        self.next.as_deref_mut()
    }

    /// Append a new empty loop in O(1)
    pub fn append_new_loop(&mut self) -> &mut LinkedLoop {
        self.append_existing_loop(LinkedLoop::new())
    }

    /// Attach a loop built elsewhere, keeping any vertices it already holds
    pub fn append_existing_loop(&mut self, ring: LinkedLoop) -> &mut LinkedLoop {
        let id = self.loops.push(ring);
        &mut self.loops[id]
    }

    /// Polygons reachable from this one, itself included
    pub fn count_polygons(&self) -> usize {
        self.iter().count()
    }

    pub fn count_loops(&self) -> usize {
        self.loops.iter().count()
    }

    /// Iterate this polygon and every polygon after it
    pub fn iter(&self) -> Polygons<'_> {
        Polygons {
            cursor: Some(self),
        }
    }

    pub fn loops(&self) -> Iter<'_, LinkedLoop> {
        self.loops.iter()
    }

    pub fn loops_mut(&mut self) -> IterMut<'_, LinkedLoop> {
        self.loops.iter_mut()
    }

    /// Node-level access to the loop list
    pub fn loop_chain(&self) -> &Chain<LinkedLoop> {
        &self.loops
    }

    /// True when there are no loops and no successor
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty() && self.next.is_none()
    }

    /// Tear down the whole chain starting at this polygon
    ///
    /// Every vertex and loop is released, and so is every polygon after this
    /// one. This polygon is skipped: it belongs to the caller and is left
    /// empty, ready to be reused.
    pub fn destroy(&mut self) {
        self.destroy_loops();

        let mut next = self.next.take();
        while let Some(mut polygon) = next {
            polygon.destroy_loops();
            next = polygon.next.take();
        }
    }

    fn destroy_loops(&mut self) {
        for ring in self.loops.iter_mut() {
            ring.destroy();
        }
        self.loops.clear();
    }
}

impl Drop for LinkedPolygon {
    // Unlink successors one at a time so long chains don't recurse.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut polygon) = next {
            next = polygon.next.take();
        }

        self.note_release();
    }
}

#[cfg(not(test))]
impl LinkedPolygon {
    #[inline(always)]
    fn note_release(&self) {}
}

#[cfg(test)]
impl LinkedPolygon {
    /// Count this node's release into `counter`
    pub(crate) fn track_release(&mut self, counter: Arc<AtomicUsize>) {
        self.released = Some(counter);
    }

    fn note_release(&self) {
        if let Some(counter) = &self.released {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl<'a> IntoIterator for &'a LinkedPolygon {
    type Item = &'a LinkedPolygon;
    type IntoIter = Polygons<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a polygon chain, see [`LinkedPolygon::iter`]
#[derive(Debug, Clone)]
pub struct Polygons<'a> {
    cursor: Option<&'a LinkedPolygon>,
}

impl<'a> Iterator for Polygons<'a> {
    type Item = &'a LinkedPolygon;

    fn next(&mut self) -> Option<&'a LinkedPolygon> {
        let current = self.cursor?;
        self.cursor = current.next.as_deref();
        Some(current)
    }
}
