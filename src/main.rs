// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a Barnsley fern to standard output as a GIF.  There are no
//! options: the picture is fixed by the constants in `config`.

extern crate barnsley;
extern crate env_logger;
#[macro_use]
extern crate log;

use std::io::{self, BufWriter, Write};

use barnsley::{FernConfig, FernError, FernRenderer, SeededDraws};

fn run() -> Result<(), FernError> {
    let config = FernConfig::default();
    info!(
        "drawing {} points onto a {}x{} canvas, seed {}",
        config.iterations,
        config.plane().0,
        config.plane().1,
        config.seed
    );
    let renderer = FernRenderer::new(config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    renderer.draw_barnsley(SeededDraws::new(config.seed), &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("barnsley: {}", e);
        std::process::exit(1);
    }
}
