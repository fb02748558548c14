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
use crate::err::{GamutError, MismatchedSize};

/// A sampled spectral power distribution.
///
/// Wavelengths are in nanometers, strictly increasing. Intensities are
/// non-negative and share the wavelength lane length.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralData {
    lambda_nm: Vec<f64>,
    values: Vec<f64>,
}

impl SpectralData {
    /// Creates a spectrum, validating lane lengths, wavelength ordering and
    /// intensity sign.
    pub fn new(lambda_nm: Vec<f64>, values: Vec<f64>) -> Result<SpectralData, GamutError> {
        if lambda_nm.is_empty() {
            return Err(GamutError::EmptySpectrum);
        }
        if lambda_nm.len() != values.len() {
            return Err(GamutError::SpectrumSizeMismatch(MismatchedSize {
                expected: lambda_nm.len(),
                received: values.len(),
            }));
        }
        if lambda_nm.windows(2).any(|w| w[1] <= w[0]) {
            return Err(GamutError::NonMonotonicWavelengths);
        }
        if values.iter().any(|&v| v < 0. || !v.is_finite()) {
            return Err(GamutError::NegativeIntensity);
        }
        Ok(SpectralData { lambda_nm, values })
    }

    /// Number of wavelength samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.lambda_nm.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lambda_nm.is_empty()
    }

    #[inline]
    pub fn lambda_nm(&self) -> &[f64] {
        &self.lambda_nm
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Two spectra are compatible when their wavelength lanes are identical.
    #[inline]
    pub fn is_compatible(&self, other: &SpectralData) -> bool {
        self.lambda_nm == other.lambda_nm
    }

    /// Returns a copy with intensities replaced by `values`.
    ///
    /// The replacement lane must match the wavelength lane length; intensity
    /// validation is skipped since windowed products of valid spectra stay
    /// non-negative.
    pub(crate) fn with_values(&self, values: Vec<f64>) -> Result<SpectralData, GamutError> {
        if values.len() != self.lambda_nm.len() {
            return Err(GamutError::SpectrumSizeMismatch(MismatchedSize {
                expected: self.lambda_nm.len(),
                received: values.len(),
            }));
        }
        Ok(SpectralData {
            lambda_nm: self.lambda_nm.clone(),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_spectrum() {
        let sd = SpectralData::new(vec![400., 500., 600.], vec![1., 0.5, 0.]).unwrap();
        assert_eq!(sd.len(), 3);
        assert!(!sd.is_empty());
    }

    #[test]
    fn rejects_empty_spectrum() {
        assert_eq!(
            SpectralData::new(vec![], vec![]),
            Err(GamutError::EmptySpectrum)
        );
    }

    #[test]
    fn rejects_mismatched_lanes() {
        assert_eq!(
            SpectralData::new(vec![400., 500.], vec![1.]),
            Err(GamutError::SpectrumSizeMismatch(MismatchedSize {
                expected: 2,
                received: 1
            }))
        );
    }

    #[test]
    fn rejects_non_increasing_wavelengths() {
        assert_eq!(
            SpectralData::new(vec![400., 400., 600.], vec![1., 1., 1.]),
            Err(GamutError::NonMonotonicWavelengths)
        );
        assert_eq!(
            SpectralData::new(vec![600., 500., 400.], vec![1., 1., 1.]),
            Err(GamutError::NonMonotonicWavelengths)
        );
    }

    #[test]
    fn rejects_negative_intensity() {
        assert_eq!(
            SpectralData::new(vec![400., 500.], vec![1., -0.25]),
            Err(GamutError::NegativeIntensity)
        );
    }

    #[test]
    fn compatibility_requires_identical_grid() {
        let a = SpectralData::new(vec![400., 500.], vec![1., 1.]).unwrap();
        let b = SpectralData::new(vec![400., 500.], vec![0., 2.]).unwrap();
        let c = SpectralData::new(vec![400., 510.], vec![1., 1.]).unwrap();
        assert!(a.is_compatible(&b));
        assert!(!a.is_compatible(&c));
    }
}
