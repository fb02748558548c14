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
use crate::spectrum::SpectralData;
use glam::DVec3;

/// An observer model mapping a spectral stimulus to a tristimulus value on
/// the 0..100 scale.
pub trait Observer {
    /// Converts a spectrum into XYZ100.
    ///
    /// The spectrum must share the observer's wavelength grid.
    fn to_xyz100(&self, spectrum: &SpectralData) -> Result<DVec3, GamutError>;
}

pub type SyncObserver = dyn Observer + Send + Sync;

/// Tabulated color matching functions on a shared wavelength grid.
///
/// Conversion integrates the stimulus against each matching function with
/// trapezoid weights and scales by `100 / integral(y_bar)`, so an
/// equal-energy unit spectrum comes out at Y = 100.
#[derive(Debug, Clone)]
pub struct TabularObserver {
    x_bar: SpectralData,
    y_bar: SpectralData,
    z_bar: SpectralData,
    weights: Vec<f64>,
    y_norm: f64,
}

impl TabularObserver {
    pub fn new(
        x_bar: SpectralData,
        y_bar: SpectralData,
        z_bar: SpectralData,
    ) -> Result<TabularObserver, GamutError> {
        if !x_bar.is_compatible(&y_bar) || !x_bar.is_compatible(&z_bar) {
            return Err(GamutError::IncompatibleSpectra);
        }
        let weights = trapezoid_weights(x_bar.lambda_nm());
        let y_norm = y_bar
            .values()
            .iter()
            .zip(weights.iter())
            .map(|(v, w)| v * w)
            .sum::<f64>();
        Ok(TabularObserver {
            x_bar,
            y_bar,
            z_bar,
            weights,
            y_norm,
        })
    }

    #[inline]
    pub fn lambda_nm(&self) -> &[f64] {
        self.x_bar.lambda_nm()
    }
}

impl Observer for TabularObserver {
    fn to_xyz100(&self, spectrum: &SpectralData) -> Result<DVec3, GamutError> {
        if !spectrum.is_compatible(&self.x_bar) {
            return Err(GamutError::IncompatibleSpectra);
        }
        let mut xyz = DVec3::ZERO;
        for (((s, w), (x, y)), z) in spectrum
            .values()
            .iter()
            .zip(self.weights.iter())
            .zip(self.x_bar.values().iter().zip(self.y_bar.values().iter()))
            .zip(self.z_bar.values().iter())
        {
            let sw = s * w;
            xyz += DVec3::new(sw * x, sw * y, sw * z);
        }
        // A y-bar lane that integrates to zero has no luminance reference,
        // leave the raw integrals unscaled.
        if self.y_norm > 0. {
            xyz *= 100. / self.y_norm;
        }
        Ok(xyz)
    }
}

fn trapezoid_weights(lambda_nm: &[f64]) -> Vec<f64> {
    let n = lambda_nm.len();
    if n == 1 {
        return vec![1.];
    }
    let mut weights = vec![0f64; n];
    for i in 0..n {
        let left = if i == 0 { lambda_nm[0] } else { lambda_nm[i - 1] };
        let right = if i == n - 1 {
            lambda_nm[n - 1]
        } else {
            lambda_nm[i + 1]
        };
        weights[i] = 0.5 * (right - left);
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn uniform(lambda: &[f64], v: f64) -> SpectralData {
        SpectralData::new(lambda.to_vec(), vec![v; lambda.len()]).unwrap()
    }

    #[test]
    fn equal_energy_spectrum_has_y_100() {
        let lambda = [400., 450., 500., 550., 600.];
        let observer = TabularObserver::new(
            uniform(&lambda, 0.5),
            uniform(&lambda, 1.),
            uniform(&lambda, 2.),
        )
        .unwrap();
        let xyz = observer.to_xyz100(&uniform(&lambda, 1.)).unwrap();
        assert_relative_eq!(xyz.x, 50., max_relative = 1e-12);
        assert_relative_eq!(xyz.y, 100., max_relative = 1e-12);
        assert_relative_eq!(xyz.z, 200., max_relative = 1e-12);
    }

    #[test]
    fn rejects_foreign_wavelength_grid() {
        let lambda = [400., 500., 600.];
        let observer = TabularObserver::new(
            uniform(&lambda, 1.),
            uniform(&lambda, 1.),
            uniform(&lambda, 1.),
        )
        .unwrap();
        let other = uniform(&[400., 500., 700.], 1.);
        assert_eq!(
            observer.to_xyz100(&other),
            Err(GamutError::IncompatibleSpectra)
        );
    }

    #[test]
    fn rejects_mismatched_matching_functions() {
        let a = uniform(&[400., 500.], 1.);
        let b = uniform(&[400., 600.], 1.);
        assert!(TabularObserver::new(a.clone(), a.clone(), b).is_err());
    }

    #[test]
    fn trapezoid_weights_cover_the_support() {
        let w = trapezoid_weights(&[400., 410., 430.]);
        assert_relative_eq!(w[0], 5., max_relative = 1e-12);
        assert_relative_eq!(w[1], 15., max_relative = 1e-12);
        assert_relative_eq!(w[2], 10., max_relative = 1e-12);
        assert_relative_eq!(w.iter().sum::<f64>(), 30., max_relative = 1e-12);
    }
}
