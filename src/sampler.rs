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
use crate::observer::SyncObserver;
use crate::spectrum::SpectralData;
use glam::DVec3;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Tristimulus samples tracing the gamut boundary.
///
/// The white point is always the last element and is additionally tracked by
/// index, so its identity never depends on append order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<DVec3>,
    white: usize,
}

impl PointCloud {
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn white_index(&self) -> usize {
        self.white
    }

    #[inline]
    pub fn white_point(&self) -> DVec3 {
        self.points[self.white]
    }

    /// Consumes the cloud, keeping sample order intact.
    #[inline]
    pub fn into_points(self) -> Vec<DVec3> {
        self.points
    }

    /// Rescales the cloud so the white point lands at Y = 100.
    pub fn normalized_to_white(mut self) -> Result<PointCloud, GamutError> {
        let white_y = self.points[self.white].y;
        if white_y == 0. {
            return Err(GamutError::DegenerateIlluminant);
        }
        let scale = 100. / white_y;
        for point in self.points.iter_mut() {
            *point *= scale;
        }
        Ok(self)
    }
}

/// Samples the family of windowed spectra believed to bound the set of
/// physically realizable colors, `n * n` slab stimuli plus the unmodified
/// illuminant as white point, `n * n + 1` points total.
///
/// Every slab is a cyclic run of `width` consecutive wavelength bins switched
/// fully on; `shift` sweeps the run across the spectrum. Windows are derived
/// by index arithmetic per sample, nothing is mutated in place, which keeps
/// the width loop safe to run on the rayon pool.
pub fn boundary_point_cloud(
    illuminant: &SpectralData,
    observer: &SyncObserver,
) -> Result<PointCloud, GamutError> {
    let n = illuminant.len();
    let slabs = (0..n)
        .into_par_iter()
        .map(|width| {
            let mut slab = Vec::with_capacity(n);
            for shift in 0..n {
                let windowed = illuminant
                    .values()
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| if (i + n - shift) % n < width { v } else { 0. })
                    .collect::<Vec<f64>>();
                let stimulus = illuminant.with_values(windowed)?;
                slab.push(observer.to_xyz100(&stimulus)?);
            }
            Ok(slab)
        })
        .collect::<Result<Vec<Vec<DVec3>>, GamutError>>()?;

    let mut points = slabs.into_iter().flatten().collect::<Vec<DVec3>>();
    points.push(observer.to_xyz100(illuminant)?);

    log::debug!(
        "sampled {} boundary stimuli over {} wavelength bins",
        points.len(),
        n
    );
    Ok(PointCloud {
        white: points.len() - 1,
        points,
    })
}
