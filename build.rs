// Exports `static/` to `dist/` as the deployable snapshot of the site.
// The wasm-pack step itself is driven by the host binary (src/main.rs);
// running it from here would recurse once wasm-pack drives cargo.

use std::{fs, path::Path};

use fs_extra::dir::{self, CopyOptions};

fn main() {
    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    if Path::new("static").exists() {
        let mut options = CopyOptions::new();
        options.content_only = true;
        if dir::copy("static", out_dir, &options).is_err() {
            println!("cargo:warning=failed to export static/ to dist/");
        }
    }

    println!("cargo:rerun-if-changed=static");
}
