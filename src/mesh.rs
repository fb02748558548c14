/*
 * // Copyright (c) Radzivon Bartoshyk 8/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use glam::DVec3;

// Anything closer to zero than this on every axis is the black stimulus.
// Coordinates are on the 0..100 scale after white normalization.
const ORIGIN_EPS: f64 = 1e-9;

/// The triangulated gamut boundary in target color space coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GamutMesh {
    /// Vertex positions in the target color space.
    pub vertices: Vec<DVec3>,
    /// Index triples into `vertices`, one triangle per entry.
    pub faces: Vec<[usize; 3]>,
}

impl GamutMesh {
    /// True when every face index addresses an existing vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let count = self.vertices.len();
        self.faces.iter().all(|f| f.iter().all(|&i| i < count))
    }
}

/// Finds the zero-stimulus ("black") vertex among vertices referenced by a
/// face, matching by value. By construction of the boundary sampling this is
/// index 0, but the lookup never relies on ordering.
pub(crate) fn find_origin_vertex(points: &[DVec3], faces: &[[usize; 3]]) -> Option<usize> {
    let mut live = vec![false; points.len()];
    for face in faces {
        for &index in face {
            live[index] = true;
        }
    }
    points
        .iter()
        .enumerate()
        .find(|(index, p)| live[*index] && p.abs().max_element() < ORIGIN_EPS)
        .map(|(index, _)| index)
}

/// Removes one vertex, drops every face touching it and compacts the
/// remaining indices to stay contiguous from 0.
///
/// Single pass building an old-to-new remap table, single pass rewriting
/// faces, O(V + F).
pub(crate) fn remove_vertex(
    points: &mut Vec<DVec3>,
    faces: &mut Vec<[usize; 3]>,
    removed: usize,
) {
    let mut remap = Vec::with_capacity(points.len());
    for index in 0..points.len() {
        remap.push(index - usize::from(index > removed));
    }
    faces.retain(|face| !face.contains(&removed));
    for face in faces.iter_mut() {
        for index in face.iter_mut() {
            *index = remap[*index];
        }
    }
    points.remove(removed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn tetrahedron() -> (Vec<DVec3>, Vec<[usize; 3]>) {
        let points = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let faces = vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
        (points, faces)
    }

    fn edge_counts(faces: &[[usize; 3]]) -> HashMap<(usize, usize), usize> {
        let mut counts = HashMap::new();
        for f in faces {
            for (a, b) in [(f[0], f[1]), (f[1], f[2]), (f[2], f[0])] {
                *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn origin_is_found_by_value() {
        let (points, faces) = tetrahedron();
        assert_eq!(find_origin_vertex(&points, &faces), Some(0));
    }

    #[test]
    fn origin_lookup_ignores_dead_vertices() {
        let (mut points, faces) = tetrahedron();
        // vertex 0 is no longer the zero point; a dead duplicate zero exists
        points[0] = DVec3::splat(2.);
        points.push(DVec3::ZERO);
        assert_eq!(find_origin_vertex(&points, &faces), None);
    }

    #[test]
    fn origin_need_not_be_first() {
        let points = vec![DVec3::X, DVec3::ZERO, DVec3::Y, DVec3::Z];
        let faces = vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
        assert_eq!(find_origin_vertex(&points, &faces), Some(1));
    }

    #[test]
    fn removing_a_vertex_compacts_indices() {
        let (mut points, mut faces) = tetrahedron();
        remove_vertex(&mut points, &mut faces, 0);
        assert_eq!(points, vec![DVec3::X, DVec3::Y, DVec3::Z]);
        assert_eq!(faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn removing_a_middle_vertex_shifts_only_higher_indices() {
        let mut points = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let mut faces = vec![[0, 2, 3], [0, 3, 2]];
        remove_vertex(&mut points, &mut faces, 1);
        assert_eq!(points, vec![DVec3::ZERO, DVec3::Y, DVec3::Z]);
        assert_eq!(faces, vec![[0, 1, 2], [0, 2, 1]]);
    }

    #[test]
    fn closed_surface_edges_are_shared_twice() {
        let (_, faces) = tetrahedron();
        assert!(edge_counts(&faces).values().all(|&c| c == 2));
    }

    #[test]
    fn bounds_check_flags_stray_indices() {
        let mesh = GamutMesh {
            vertices: vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            faces: vec![[0, 1, 2]],
        };
        assert!(mesh.indices_in_bounds());
        let broken = GamutMesh {
            faces: vec![[0, 1, 3]],
            ..mesh
        };
        assert!(!broken.indices_in_bounds());
    }
}
