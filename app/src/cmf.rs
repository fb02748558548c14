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
use gamutforge::{SpectralData, TabularObserver};

/// Piecewise Gaussian with separate left/right widths.
#[inline]
fn lobe(lambda: f64, mu: f64, sigma_l: f64, sigma_r: f64) -> f64 {
    let sigma = if lambda < mu { sigma_l } else { sigma_r };
    let t = (lambda - mu) / sigma;
    (-0.5 * t * t).exp()
}

// Multi-lobe Gaussian fit of the CIE 1931 2 degree color matching functions
// (Wyman, Sloan, Shirley 2013).
#[inline]
fn x_bar(lambda: f64) -> f64 {
    1.056 * lobe(lambda, 599.8, 37.9, 31.0) + 0.362 * lobe(lambda, 442.0, 16.0, 26.7)
        - 0.065 * lobe(lambda, 501.1, 20.4, 26.2)
}

#[inline]
fn y_bar(lambda: f64) -> f64 {
    0.821 * lobe(lambda, 568.8, 46.9, 40.5) + 0.286 * lobe(lambda, 530.9, 16.3, 31.1)
}

#[inline]
fn z_bar(lambda: f64) -> f64 {
    1.217 * lobe(lambda, 437.0, 11.8, 36.0) + 0.681 * lobe(lambda, 459.0, 26.0, 13.8)
}

pub(crate) fn wavelength_grid(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut lambda = Vec::new();
    let mut current = start;
    while current <= end + 1e-9 {
        lambda.push(current);
        current += step;
    }
    lambda
}

pub(crate) fn cie1931_observer(lambda: &[f64]) -> TabularObserver {
    let sample = |f: fn(f64) -> f64| {
        // the x-bar fit dips slightly below zero near its trough
        let values = lambda.iter().map(|&l| f(l).max(0.)).collect::<Vec<f64>>();
        SpectralData::new(lambda.to_vec(), values).expect("analytic CMF must be a valid spectrum")
    };
    TabularObserver::new(sample(x_bar), sample(y_bar), sample(z_bar))
        .expect("CMF lanes share one wavelength grid")
}

pub(crate) fn equal_energy(lambda: &[f64]) -> SpectralData {
    SpectralData::new(lambda.to_vec(), vec![1.; lambda.len()])
        .expect("equal-energy illuminant must be a valid spectrum")
}

/// Planckian radiator spectrum, normalized to 1 at 560 nm.
pub(crate) fn blackbody(lambda: &[f64], temperature_k: f64) -> SpectralData {
    let radiance = |lambda_nm: f64| {
        // second radiation constant, m * K
        const C2: f64 = 1.4388e-2;
        let lambda_m = lambda_nm * 1e-9;
        1. / (lambda_m.powi(5) * ((C2 / (lambda_m * temperature_k)).exp_m1()))
    };
    let anchor = radiance(560.);
    let values = lambda
        .iter()
        .map(|&l| radiance(l) / anchor)
        .collect::<Vec<f64>>();
    SpectralData::new(lambda.to_vec(), values).expect("blackbody spectrum must be valid")
}
