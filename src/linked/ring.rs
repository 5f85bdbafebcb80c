use super::chain::{Chain, Iter};
use crate::domain::LatLng;

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// One boundary ring of a polygon
///
/// The loop does not record whether it is an outer ring or a hole.
#[derive(Debug, Clone, Default)]
pub struct LinkedLoop {
    vertices: Chain<LatLng>,
    #[cfg(test)]
    released: Option<Arc<AtomicUsize>>,
}

impl LinkedLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a coordinate to the end of the ring, stored as given
    pub fn append_vertex(&mut self, vertex: LatLng) -> &LatLng {
        let id = self.vertices.push(vertex);
        &self.vertices[id]
    }

    pub fn count_vertices(&self) -> usize {
        self.vertices.iter().count()
    }

    pub fn vertices(&self) -> Iter<'_, LatLng> {
        self.vertices.iter()
    }

    /// Node-level access to the vertex list
    pub fn chain(&self) -> &Chain<LatLng> {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Release every vertex node. The loop itself stays usable, now empty.
    pub fn destroy(&mut self) {
        self.vertices.clear();
    }
}

impl FromIterator<LatLng> for LinkedLoop {
    fn from_iter<I: IntoIterator<Item = LatLng>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.vertices = iter.into_iter().collect();
        ring
    }
}

#[cfg(test)]
impl LinkedLoop {
    /// Count this loop's release into `counter`
    pub(crate) fn track_release(&mut self, counter: Arc<AtomicUsize>) {
        self.released = Some(counter);
    }
}

#[cfg(test)]
impl Drop for LinkedLoop {
    fn drop(&mut self) {
        if let Some(counter) = &self.released {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}
