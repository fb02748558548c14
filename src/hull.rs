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
use crate::err::GamutError;
use chull::ConvexHullWrapper;
use glam::DVec3;
use std::collections::HashMap;

/// Triangulated convex hull boundary of a 3D point cloud.
///
/// Faces index the input slice; interior points simply never appear in a
/// face. Tie-breaking for coplanar configurations is whatever the backing
/// hull implementation does, exact face layout on such inputs is not
/// guaranteed across hull libraries.
pub fn convex_hull_faces(points: &[DVec3]) -> Result<Vec<[usize; 3]>, GamutError> {
    if points.len() < 4 {
        return Err(GamutError::DegenerateGeometry);
    }
    let rows = points
        .iter()
        .map(|p| vec![p.x, p.y, p.z])
        .collect::<Vec<Vec<f64>>>();
    let hull =
        ConvexHullWrapper::try_new(&rows, None).map_err(|_| GamutError::DegenerateGeometry)?;
    let (vertices, indices) = hull.vertices_indices();

    // Hull vertices are coordinate copies of input points; match them back
    // to input indices bit-exactly, duplicates resolve to the first
    // occurrence.
    let mut lookup = HashMap::with_capacity(points.len());
    for (index, &point) in points.iter().enumerate() {
        lookup.entry(bit_key(point)).or_insert(index);
    }
    let source = vertices
        .iter()
        .map(|v| {
            let point = DVec3::new(v[0], v[1], v[2]);
            match lookup.get(&bit_key(point)) {
                Some(&index) => index,
                None => nearest_index(points, point),
            }
        })
        .collect::<Vec<usize>>();

    let faces = indices
        .chunks_exact(3)
        .map(|c| [source[c[0]], source[c[1]], source[c[2]]])
        .collect::<Vec<[usize; 3]>>();
    log::debug!(
        "hull: {} faces over {} live of {} input points",
        faces.len(),
        vertices.len(),
        points.len()
    );
    Ok(faces)
}

#[inline]
fn bit_key(p: DVec3) -> [u64; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

fn nearest_index(points: &[DVec3], target: DVec3) -> usize {
    let mut best = 0usize;
    let mut best_distance = f64::INFINITY;
    for (index, &point) in points.iter().enumerate() {
        let distance = point.distance_squared(target);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Vec<DVec3> {
        let mut points = Vec::new();
        for x in [0., 1.] {
            for y in [0., 1.] {
                for z in [0., 1.] {
                    points.push(DVec3::new(x, y, z));
                }
            }
        }
        points
    }

    #[test]
    fn cube_hull_has_twelve_triangles() {
        let mut points = unit_cube();
        points.push(DVec3::splat(0.5)); // interior point, must stay dead
        let faces = convex_hull_faces(&points).unwrap();
        assert_eq!(faces.len(), 12);
        let mut live = vec![false; points.len()];
        for face in &faces {
            for &i in face {
                assert!(i < points.len());
                live[i] = true;
            }
        }
        assert!(!live[8], "interior point must not be referenced");
        assert_eq!(live[..8].iter().filter(|&&l| l).count(), 8);
    }

    #[test]
    fn duplicate_points_resolve_to_first_occurrence() {
        let mut points = unit_cube();
        points.push(points[0]); // duplicate corner
        let faces = convex_hull_faces(&points).unwrap();
        assert!(faces.iter().all(|f| !f.contains(&8)));
        assert!(faces.iter().any(|f| f.contains(&0)));
    }

    #[test]
    fn collapsed_cloud_is_degenerate() {
        let points = vec![DVec3::splat(100.); 10];
        assert_eq!(
            convex_hull_faces(&points),
            Err(GamutError::DegenerateGeometry)
        );
    }

    #[test]
    fn coplanar_cloud_is_degenerate() {
        let points = (0..6)
            .map(|i| DVec3::new(i as f64, (i * i) as f64, 0.))
            .collect::<Vec<DVec3>>();
        assert_eq!(
            convex_hull_faces(&points),
            Err(GamutError::DegenerateGeometry)
        );
    }

    #[test]
    fn too_few_points_is_degenerate() {
        let points = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        assert_eq!(
            convex_hull_faces(&points),
            Err(GamutError::DegenerateGeometry)
        );
    }
}
