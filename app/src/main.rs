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
mod cmf;
mod parse;

use gamutforge::{
    surface_gamut_mesh, CieLab, CieLuv, CieXyY, ColorSpace, GamutMesh, Oklab, SrgbLinear,
    Xyz100,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    env_logger::init();
    let options = parse::parse_args();

    let lambda = cmf::wavelength_grid(
        options.lambda_start,
        options.lambda_end,
        options.lambda_step,
    );
    let observer = cmf::cie1931_observer(&lambda);
    let illuminant = match options.temperature {
        Some(temperature) => cmf::blackbody(&lambda, temperature),
        None => cmf::equal_energy(&lambda),
    };
    log::info!(
        "{} wavelength bins, {} boundary stimuli",
        lambda.len(),
        lambda.len() * lambda.len() + 1
    );

    let space: Box<dyn ColorSpace> = match options.space.as_str() {
        "xyz" => Box::new(Xyz100),
        "srgb-linear" => Box::new(SrgbLinear::new()),
        "lab" => Box::new(CieLab::default()),
        "luv" => Box::new(CieLuv::default()),
        "xyy" => Box::new(CieXyY),
        "oklab" => Box::new(Oklab),
        other => {
            eprintln!("unknown color space '{}'", other);
            std::process::exit(1);
        }
    };

    let mesh = match surface_gamut_mesh(space.as_ref(), &observer, &illuminant) {
        Ok(mesh) => mesh,
        Err(err) => {
            eprintln!("gamut computation failed: {}", err);
            std::process::exit(1);
        }
    };

    let labels = space.labels();
    println!(
        "{} gamut surface ({} {} {}): {} vertices, {} faces",
        options.space,
        labels[0],
        labels[1],
        labels[2],
        mesh.vertices.len(),
        mesh.faces.len()
    );
    if let Err(err) = write_obj(&mesh, &options.output) {
        eprintln!("failed to write {}: {}", options.output, err);
        std::process::exit(1);
    }
    println!("wrote {}", options.output);
}

fn write_obj(mesh: &GamutMesh, path: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for f in &mesh.faces {
        // OBJ indices are 1-based
        writeln!(writer, "f {} {} {}", f[0] + 1, f[1] + 1, f[2] + 1)?;
    }
    writer.flush()
}
