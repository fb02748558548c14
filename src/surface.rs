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
use crate::colorspace::ColorSpace;
use crate::err::GamutError;
use crate::hull::convex_hull_faces;
use crate::mesh::{find_origin_vertex, remove_vertex, GamutMesh};
use crate::observer::SyncObserver;
use crate::sampler::boundary_point_cloud;
use crate::spectrum::SpectralData;

/// Computes the gamut boundary surface for an observer under an illuminant,
/// expressed in the target color space.
///
/// Sampling, white normalization, convex hull, origin removal for spaces
/// without a defined origin, then the target-space transform. The whole
/// computation is pure; any stage failure aborts the invocation with the
/// violated precondition.
pub fn surface_gamut_mesh(
    colorspace: &dyn ColorSpace,
    observer: &SyncObserver,
    illuminant: &SpectralData,
) -> Result<GamutMesh, GamutError> {
    let cloud = boundary_point_cloud(illuminant, observer)?.normalized_to_white()?;
    let mut faces = convex_hull_faces(cloud.points())?;
    let mut points = cloud.into_points();

    if !colorspace.origin_well_defined() {
        // The target space cannot represent the black stimulus; drop that
        // vertex and the triangle fan around it.
        if let Some(origin) = find_origin_vertex(&points, &faces) {
            let faces_before = faces.len();
            remove_vertex(&mut points, &mut faces, origin);
            log::debug!(
                "removed origin vertex {}, {} incident faces",
                origin,
                faces_before - faces.len()
            );
        }
    }

    let vertices = colorspace.forward(&points)?;
    log::debug!(
        "gamut surface: {} vertices, {} faces",
        vertices.len(),
        faces.len()
    );
    Ok(GamutMesh { vertices, faces })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorspace::{CieLuv, CieXyY, Xyz100};
    use crate::observer::{Observer, TabularObserver};
    use approx::assert_relative_eq;
    use glam::DVec3;
    use std::collections::HashMap;

    fn test_observer() -> TabularObserver {
        let lambda = vec![400., 410., 420., 430., 440.];
        let cmf = |values: [f64; 5]| SpectralData::new(lambda.clone(), values.to_vec()).unwrap();
        TabularObserver::new(
            cmf([1., 0.6, 0.2, 0., 0.]),
            cmf([0.1, 0.6, 1., 0.6, 0.1]),
            cmf([0., 0., 0.2, 0.6, 1.]),
        )
        .unwrap()
    }

    fn unit_illuminant() -> SpectralData {
        SpectralData::new(vec![400., 410., 420., 430., 440.], vec![1.; 5]).unwrap()
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
    fn xyz_mesh_keeps_the_whole_point_cloud() {
        let mesh = surface_gamut_mesh(&Xyz100, &test_observer(), &unit_illuminant()).unwrap();
        assert_eq!(mesh.vertices.len(), 5 * 5 + 1);
        assert!(mesh.indices_in_bounds());
        assert!(!mesh.faces.is_empty());
        // white point survives as the last vertex at Y = 100
        assert_relative_eq!(mesh.vertices[25].y, 100., max_relative = 1e-9);
        // closed orientable surface: every edge shared by exactly two faces
        assert!(edge_counts(&mesh.faces).values().all(|&c| c == 2));
    }

    #[test]
    fn origin_removal_drops_exactly_one_vertex() {
        let observer = test_observer();
        let illuminant = unit_illuminant();
        let with_origin = surface_gamut_mesh(&Xyz100, &observer, &illuminant).unwrap();
        let without = surface_gamut_mesh(&CieLuv::default(), &observer, &illuminant).unwrap();
        assert_eq!(without.vertices.len(), with_origin.vertices.len() - 1);
        assert!(without.indices_in_bounds());
        assert!(without.faces.len() < with_origin.faces.len());
        // the surface is an open cap now, but still a valid index set
        assert!(without
            .faces
            .iter()
            .all(|f| f.iter().all(|&i| i < without.vertices.len())));
    }

    #[test]
    fn chromaticity_space_mesh_is_consistent() {
        let mesh =
            surface_gamut_mesh(&CieXyY, &test_observer(), &unit_illuminant()).unwrap();
        assert_eq!(mesh.vertices.len(), 25);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn pipeline_is_deterministic() {
        let observer = test_observer();
        let illuminant = unit_illuminant();
        let first = surface_gamut_mesh(&Xyz100, &observer, &illuminant).unwrap();
        let second = surface_gamut_mesh(&Xyz100, &observer, &illuminant).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn collapsed_observer_fails_with_degenerate_geometry() {
        /// Every component carries the same intensity sum: the whole cloud
        /// collapses onto a line, no hull exists.
        struct SumObserver;

        impl Observer for SumObserver {
            fn to_xyz100(&self, spectrum: &SpectralData) -> Result<DVec3, GamutError> {
                Ok(DVec3::splat(spectrum.values().iter().sum()))
            }
        }

        let illuminant =
            SpectralData::new(vec![400., 500., 600.], vec![1., 1., 1.]).unwrap();
        assert_eq!(
            surface_gamut_mesh(&Xyz100, &SumObserver, &illuminant),
            Err(GamutError::DegenerateGeometry)
        );
    }
}
