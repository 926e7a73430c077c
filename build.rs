// build.rs: capture the build timestamp as rustc env vars.
//
// The timestamp comes from `SOURCE_DATE_EPOCH` when the packager pins it, and
// from the wall clock otherwise. Only the pinned form is reproducible: two
// unpinned builds a second apart produce different binaries.

#[allow(dead_code)]
#[path = "src/build_stamp.rs"]
mod build_stamp;

use std::time::SystemTime;

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/");
    println!(
        "cargo:rerun-if-env-changed={}",
        build_stamp::SOURCE_DATE_EPOCH_VAR
    );

    let source_date_epoch = std::env::var(build_stamp::SOURCE_DATE_EPOCH_VAR).ok();
    let epoch = build_stamp::resolve_epoch(source_date_epoch.as_deref(), SystemTime::now())?;
    let stamp = epoch.stamp()?;

    if !epoch.is_pinned() {
        println!(
            "cargo:warning=build timestamp taken from the clock; set {} for a reproducible build",
            build_stamp::SOURCE_DATE_EPOCH_VAR
        );
    }

    println!("cargo:rustc-env=RSB_BUILD_DATE={}", stamp.date);
    println!("cargo:rustc-env=RSB_BUILD_TIME={}", stamp.time);

    Ok(())
}
