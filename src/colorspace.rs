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
use glam::{DMat3, DVec3};

/// CIE D65 white point on the XYZ100 scale, 2 degree observer.
pub const D65_WHITE_XYZ100: DVec3 = DVec3::new(95.047, 100., 108.883);

/// A target color coordinate system reachable from XYZ100.
pub trait ColorSpace {
    /// Whether the zero-stimulus point has well-defined coordinates in this
    /// space. Chromaticity-based spaces divide by the stimulus sum and lose
    /// the origin.
    fn origin_well_defined(&self) -> bool {
        true
    }

    /// Axis names, in component order.
    fn labels(&self) -> [&'static str; 3];

    /// Batch forward transform from XYZ100. Output order and length match the
    /// input exactly.
    fn forward(&self, xyz100: &[DVec3]) -> Result<Vec<DVec3>, GamutError>;
}

/// Maps every point through `op`, rejecting non-finite outputs with the
/// offending vertex index.
#[inline]
fn forward_points<F>(xyz100: &[DVec3], op: F) -> Result<Vec<DVec3>, GamutError>
where
    F: Fn(DVec3) -> DVec3,
{
    xyz100
        .iter()
        .enumerate()
        .map(|(index, &point)| {
            let mapped = op(point);
            if mapped.is_finite() {
                Ok(mapped)
            } else {
                Err(GamutError::TransformDomain(index))
            }
        })
        .collect()
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct Chromacity {
    pub x: f64,
    pub y: f64,
}

impl Chromacity {
    pub const D65: Chromacity = Chromacity {
        x: 0.3127,
        y: 0.3290,
    };
}

#[inline]
fn xy_to_xyz(xy: Chromacity) -> DVec3 {
    DVec3::new(xy.x / xy.y, 1., (1. - xy.x - xy.y) / xy.y)
}

#[inline]
fn mat3_from_rows(r0: DVec3, r1: DVec3, r2: DVec3) -> DMat3 {
    DMat3::from_cols(r0, r1, r2).transpose()
}

/// RGB -> XYZ matrix for the given primaries, adapted so the given white
/// chromaticity maps to RGB (1, 1, 1).
fn gamut_to_xyz(primaries_xy: [Chromacity; 3], white_point: Chromacity) -> Option<DMat3> {
    let xyz_matrix = DMat3::from_cols(
        xy_to_xyz(primaries_xy[0]),
        xy_to_xyz(primaries_xy[1]),
        xy_to_xyz(primaries_xy[2]),
    );
    if xyz_matrix.determinant() == 0. {
        return None;
    }
    let s = xyz_matrix.inverse() * xy_to_xyz(white_point);
    Some(DMat3::from_cols(
        xyz_matrix.x_axis * s.x,
        xyz_matrix.y_axis * s.y,
        xyz_matrix.z_axis * s.z,
    ))
}

/// Identity target space, tristimulus coordinates pass through unchanged.
#[derive(Debug, Default, Copy, Clone)]
pub struct Xyz100;

impl ColorSpace for Xyz100 {
    fn labels(&self) -> [&'static str; 3] {
        ["X", "Y", "Z"]
    }

    fn forward(&self, xyz100: &[DVec3]) -> Result<Vec<DVec3>, GamutError> {
        forward_points(xyz100, |p| p)
    }
}

const SRGB_PRIMARIES: [Chromacity; 3] = [
    Chromacity { x: 0.640, y: 0.330 },
    Chromacity { x: 0.300, y: 0.600 },
    Chromacity { x: 0.150, y: 0.060 },
];

/// Linear sRGB. Spectral boundary colors mostly land outside the sRGB cube,
/// components are intentionally left unclamped.
#[derive(Debug, Copy, Clone)]
pub struct SrgbLinear {
    xyz_to_rgb: DMat3,
}

impl SrgbLinear {
    pub fn new() -> SrgbLinear {
        // The primaries matrix is nonsingular, the fallback is never taken.
        let rgb_to_xyz =
            gamut_to_xyz(SRGB_PRIMARIES, Chromacity::D65).unwrap_or(DMat3::IDENTITY);
        SrgbLinear {
            xyz_to_rgb: rgb_to_xyz.inverse(),
        }
    }
}

impl Default for SrgbLinear {
    fn default() -> Self {
        SrgbLinear::new()
    }
}

impl ColorSpace for SrgbLinear {
    fn labels(&self) -> [&'static str; 3] {
        ["R", "G", "B"]
    }

    fn forward(&self, xyz100: &[DVec3]) -> Result<Vec<DVec3>, GamutError> {
        forward_points(xyz100, |p| self.xyz_to_rgb * (p / 100.))
    }
}

// 6/29 toe constant of the CIE lightness function.
const LAB_DELTA: f64 = 6. / 29.;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_DELTA * LAB_DELTA * LAB_DELTA {
        t.cbrt()
    } else {
        t / (3. * LAB_DELTA * LAB_DELTA) + 4. / 29.
    }
}

/// CIE L*a*b* relative to a reference white.
#[derive(Debug, Copy, Clone)]
pub struct CieLab {
    white_xyz100: DVec3,
}

impl CieLab {
    pub fn new(white_xyz100: DVec3) -> CieLab {
        CieLab { white_xyz100 }
    }
}

impl Default for CieLab {
    fn default() -> Self {
        CieLab::new(D65_WHITE_XYZ100)
    }
}

impl ColorSpace for CieLab {
    fn labels(&self) -> [&'static str; 3] {
        ["L*", "a*", "b*"]
    }

    fn forward(&self, xyz100: &[DVec3]) -> Result<Vec<DVec3>, GamutError> {
        let wp = self.white_xyz100;
        forward_points(xyz100, |p| {
            let fx = lab_f(p.x / wp.x);
            let fy = lab_f(p.y / wp.y);
            let fz = lab_f(p.z / wp.z);
            DVec3::new(116. * fy - 16., 500. * (fx - fy), 200. * (fy - fz))
        })
    }
}

/// CIE L*u*v* relative to a reference white.
///
/// The u'v' chromaticity underneath is undefined at the zero stimulus, so the
/// origin is not well defined; zero-energy points map to the (0, 0, 0) limit.
#[derive(Debug, Copy, Clone)]
pub struct CieLuv {
    white_xyz100: DVec3,
}

impl CieLuv {
    pub fn new(white_xyz100: DVec3) -> CieLuv {
        CieLuv { white_xyz100 }
    }
}

impl Default for CieLuv {
    fn default() -> Self {
        CieLuv::new(D65_WHITE_XYZ100)
    }
}

#[inline]
fn u_prime(p: DVec3) -> f64 {
    4. * p.x / (p.x + 15. * p.y + 3. * p.z)
}

#[inline]
fn v_prime(p: DVec3) -> f64 {
    9. * p.y / (p.x + 15. * p.y + 3. * p.z)
}

impl ColorSpace for CieLuv {
    fn origin_well_defined(&self) -> bool {
        false
    }

    fn labels(&self) -> [&'static str; 3] {
        ["L*", "u*", "v*"]
    }

    fn forward(&self, xyz100: &[DVec3]) -> Result<Vec<DVec3>, GamutError> {
        let wp = self.white_xyz100;
        forward_points(xyz100, |p| {
            if p.x + 15. * p.y + 3. * p.z == 0. {
                return DVec3::ZERO;
            }
            let fy = lab_f(p.y / wp.y);
            let l = 116. * fy - 16.;
            let u = 13. * l * (u_prime(p) - u_prime(wp));
            let v = 13. * l * (v_prime(p) - v_prime(wp));
            DVec3::new(l, u, v)
        })
    }
}

/// CIE xyY chromaticity plus luminance.
///
/// x and y are undefined at the zero stimulus, the origin is not well
/// defined.
#[derive(Debug, Default, Copy, Clone)]
pub struct CieXyY;

impl ColorSpace for CieXyY {
    fn origin_well_defined(&self) -> bool {
        false
    }

    fn labels(&self) -> [&'static str; 3] {
        ["x", "y", "Y"]
    }

    fn forward(&self, xyz100: &[DVec3]) -> Result<Vec<DVec3>, GamutError> {
        forward_points(xyz100, |p| {
            let sum = p.x + p.y + p.z;
            if sum == 0. {
                return DVec3::ZERO;
            }
            DVec3::new(p.x / sum, p.y / sum, p.y)
        })
    }
}

/// Oklab, computed over XYZ scaled to the unit range.
#[derive(Debug, Default, Copy, Clone)]
pub struct Oklab;

impl ColorSpace for Oklab {
    fn labels(&self) -> [&'static str; 3] {
        ["L", "a", "b"]
    }

    fn forward(&self, xyz100: &[DVec3]) -> Result<Vec<DVec3>, GamutError> {
        let m1 = mat3_from_rows(
            DVec3::new(0.8189330101, 0.3618667424, -0.1288597137),
            DVec3::new(0.0329845436, 0.9293118715, 0.0361456387),
            DVec3::new(0.0482003018, 0.2643662691, 0.6338517070),
        );
        let m2 = mat3_from_rows(
            DVec3::new(0.2104542553, 0.7936177850, -0.0040720468),
            DVec3::new(1.9779984951, -2.4285922050, 0.4505937099),
            DVec3::new(0.0259040371, 0.7827717662, -0.8086757660),
        );
        forward_points(xyz100, |p| {
            let lms = m1 * (p / 100.);
            let lms = DVec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
            m2 * lms
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lab_maps_reference_white_to_l_100() {
        let lab = CieLab::default()
            .forward(&[D65_WHITE_XYZ100])
            .unwrap()[0];
        assert_relative_eq!(lab.x, 100., max_relative = 1e-12);
        assert_relative_eq!(lab.y, 0., epsilon = 1e-9);
        assert_relative_eq!(lab.z, 0., epsilon = 1e-9);
    }

    #[test]
    fn lab_origin_stays_at_zero() {
        let lab = CieLab::default().forward(&[DVec3::ZERO]).unwrap()[0];
        assert_relative_eq!(lab.x, 0., epsilon = 1e-9);
        assert_relative_eq!(lab.y, 0., epsilon = 1e-9);
        assert_relative_eq!(lab.z, 0., epsilon = 1e-9);
    }

    #[test]
    fn luv_maps_reference_white_to_l_100() {
        let luv = CieLuv::default()
            .forward(&[D65_WHITE_XYZ100])
            .unwrap()[0];
        assert_relative_eq!(luv.x, 100., max_relative = 1e-12);
        assert_relative_eq!(luv.y, 0., epsilon = 1e-9);
        assert_relative_eq!(luv.z, 0., epsilon = 1e-9);
    }

    #[test]
    fn luv_zero_stimulus_takes_the_limit() {
        assert_eq!(
            CieLuv::default().forward(&[DVec3::ZERO]).unwrap()[0],
            DVec3::ZERO
        );
        assert!(!CieLuv::default().origin_well_defined());
    }

    #[test]
    fn srgb_maps_d65_white_to_ones() {
        // White derived from the same chromaticity the matrix was built with.
        let white = xy_to_xyz(Chromacity::D65) * 100.;
        let rgb = SrgbLinear::new().forward(&[white]).unwrap()[0];
        assert_relative_eq!(rgb.x, 1., max_relative = 1e-9);
        assert_relative_eq!(rgb.y, 1., max_relative = 1e-9);
        assert_relative_eq!(rgb.z, 1., max_relative = 1e-9);
    }

    #[test]
    fn xyy_splits_chromaticity_and_luminance() {
        let out = CieXyY.forward(&[DVec3::new(50., 25., 25.)]).unwrap()[0];
        assert_relative_eq!(out.x, 0.5, max_relative = 1e-12);
        assert_relative_eq!(out.y, 0.25, max_relative = 1e-12);
        assert_relative_eq!(out.z, 25., max_relative = 1e-12);
        assert_eq!(CieXyY.forward(&[DVec3::ZERO]).unwrap()[0], DVec3::ZERO);
    }

    #[test]
    fn oklab_white_is_near_unit_lightness() {
        let white = xy_to_xyz(Chromacity::D65) * 100.;
        let lab = Oklab.forward(&[white]).unwrap()[0];
        assert_relative_eq!(lab.x, 1., max_relative = 2e-3);
        assert!(lab.y.abs() < 2e-3);
        assert!(lab.z.abs() < 2e-3);
    }

    #[test]
    fn degenerate_white_reports_transform_domain() {
        let lab = CieLab::new(DVec3::new(0., 100., 100.));
        assert_eq!(
            lab.forward(&[D65_WHITE_XYZ100]),
            Err(GamutError::TransformDomain(0))
        );
    }
}
