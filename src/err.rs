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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub enum GamutError {
    SpectrumSizeMismatch(MismatchedSize),
    EmptySpectrum,
    NonMonotonicWavelengths,
    NegativeIntensity,
    IncompatibleSpectra,
    DegenerateIlluminant,
    DegenerateGeometry,
    TransformDomain(usize),
}

impl Display for GamutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamutError::SpectrumSizeMismatch(size) => f.write_fmt(format_args!(
                "Wavelength and intensity lanes must match: expected={}, received={}",
                size.expected, size.received
            )),
            GamutError::EmptySpectrum => f.write_str("Spectrum must hold at least one sample"),
            GamutError::NonMonotonicWavelengths => {
                f.write_str("Wavelengths must be strictly increasing")
            }
            GamutError::NegativeIntensity => f.write_str("Spectral intensity must not be negative"),
            GamutError::IncompatibleSpectra => {
                f.write_str("Spectra are defined on different wavelength grids")
            }
            GamutError::DegenerateIlluminant => {
                f.write_str("Illuminant white point has zero luminance")
            }
            GamutError::DegenerateGeometry => {
                f.write_str("Point cloud does not span 3 dimensions, cannot build a hull")
            }
            GamutError::TransformDomain(index) => f.write_fmt(format_args!(
                "Color space transform left its domain at vertex {}",
                index
            )),
        }
    }
}

impl Error for GamutError {}
