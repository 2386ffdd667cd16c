//! End-to-end scenario: a gold dataset on disk, opened through a catalog
//! and queried at and around the grid boundaries.

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use opal_materials::catalog::Catalog;
use opal_materials::interpolate::InterpolationKind;
use opal_materials::johnson_christy;
use opal_materials::provider::{DielectricModel, MaterialError};
use opal_materials::table;
use opal_materials::tabulated::ResampleOptions;

/// A throwaway catalog directory holding the embedded gold table as a
/// `gold.nk` dataset file.
fn gold_catalog(tag: &str) -> (Catalog, PathBuf) {
    let dir = std::env::temp_dir().join(format!("opal-{tag}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let bytes = table::encode_samples(&johnson_christy::gold_samples());
    fs::write(dir.join("gold.nk"), bytes).unwrap();
    (Catalog::new(&dir), dir)
}

#[test]
fn gold_scenario_round_trips_through_the_catalog() {
    let (catalog, dir) = gold_catalog("scenario");
    // Micrometre unit length, defaults: cubic fit, 2048-point grid.
    let model = catalog.open("gold", 1.0, &ResampleOptions::default()).unwrap();

    let ws = model.frequencies();
    assert_eq!(ws.len(), 2048);
    for pair in ws.windows(2) {
        assert!(pair[0] < pair[1], "grid must be strictly increasing");
    }

    // Querying at the grid's first frequency succeeds with a finite value
    // equal to the first sample's permittivity.
    let first = ws[0];
    let eps = model.permittivity(first).unwrap();
    assert!(eps.re.is_finite() && eps.im.is_finite());
    let (n, k) = (model.n_values()[0], model.k_values()[0]);
    assert_relative_eq!(eps.re, n * n - k * k, max_relative = 1e-12);
    assert_relative_eq!(eps.im, 2.0 * n * k, max_relative = 1e-12);

    // 10% below the first grid frequency must be rejected, not clamped.
    let err = model.permittivity(0.9 * first).unwrap_err();
    assert!(matches!(err, MaterialError::OutOfRange { .. }));

    // Same above the last grid frequency.
    let (_, last) = model.frequency_range();
    let err = model.permittivity(1.1 * last).unwrap_err();
    assert!(matches!(err, MaterialError::OutOfRange { .. }));

    // Passivity across the sampled band: n, k >= 0 so Im eps >= 0.
    for i in 0..200 {
        let w = first + (last - first) * i as f64 / 199.0;
        let eps = model.permittivity(w).unwrap();
        assert!(eps.im >= 0.0, "Im eps = {} at w = {w}", eps.im);
    }

    fs::remove_dir_all(dir).ok();
}

#[test]
fn unknown_material_is_dataset_not_found() {
    let (catalog, dir) = gold_catalog("missing");
    let err = catalog
        .open("silver", 1.0, &ResampleOptions::default())
        .unwrap_err();
    assert!(matches!(err, MaterialError::DatasetNotFound { .. }));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn truncated_dataset_is_rejected() {
    let (catalog, dir) = gold_catalog("truncated");
    let mut bytes = table::encode_samples(&johnson_christy::gold_samples());
    bytes.truncate(bytes.len() - 5);
    fs::write(dir.join("clipped.nk"), bytes).unwrap();

    let err = catalog
        .open("clipped", 1.0, &ResampleOptions::default())
        .unwrap_err();
    assert!(matches!(err, MaterialError::InvalidData(_)));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn interpolation_kind_is_string_selectable() {
    let (catalog, dir) = gold_catalog("kinds");

    for name in ["linear", "cubic"] {
        let kind: InterpolationKind = name.parse().unwrap();
        let options = ResampleOptions { kind, grid_size: 256 };
        let model = catalog.open("gold", 1.0, &options).unwrap();
        assert_eq!(model.frequencies().len(), 256);
    }

    let err = "quadratic".parse::<InterpolationKind>().unwrap_err();
    assert!(matches!(err, MaterialError::UnsupportedInterpolation(_)));

    fs::remove_dir_all(dir).ok();
}

/// Linear and cubic fits agree exactly at the ends of the grid and stay
/// close to each other in between for smooth metallic data.
#[test]
fn fits_agree_at_the_grid_endpoints() {
    let (catalog, dir) = gold_catalog("agreement");

    let linear = catalog
        .open("gold", 1.0, &ResampleOptions { kind: InterpolationKind::Linear, grid_size: 512 })
        .unwrap();
    let cubic = catalog
        .open("gold", 1.0, &ResampleOptions { kind: InterpolationKind::Cubic, grid_size: 512 })
        .unwrap();

    assert_eq!(linear.frequencies(), cubic.frequencies());
    for idx in [0, 511] {
        assert_relative_eq!(
            linear.n_values()[idx],
            cubic.n_values()[idx],
            max_relative = 1e-9
        );
        assert_relative_eq!(
            linear.k_values()[idx],
            cubic.k_values()[idx],
            max_relative = 1e-9
        );
    }

    fs::remove_dir_all(dir).ok();
}
