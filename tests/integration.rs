use voroplane::{
    tessellate, BorderMode, BoundingBox, Point, Tessellation, VoronoiError, BOX_ID_BOTTOM,
    BOX_ID_LEFT, BOX_ID_RIGHT, BOX_ID_TOP,
};

fn unit_box() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 1000.0, 1000.0)
}

fn has_vertex(tess: &Tessellation, p: Point) -> bool {
    tess.edges()
        .iter()
        .any(|e| e.start.distance(p) < 1e-6 || e.end.distance(p) < 1e-6)
}

#[test]
fn test_empty_input_yields_empty_diagram() {
    let tess = tessellate(&[], unit_box(), BorderMode::ClosedBorders).unwrap();
    assert_eq!(tess.count_sites(), 0);
    assert_eq!(tess.count_cells(), 0);
    assert!(tess.edges().is_empty());
}

#[test]
fn test_single_site_owns_the_whole_box() {
    let tess = tessellate(&[123.0, 456.0], unit_box(), BorderMode::ClosedBorders).unwrap();
    assert_eq!(tess.count_cells(), 1);
    let cell = tess.cell(0).unwrap();
    assert!((cell.area() - 1_000_000.0).abs() < 1e-6);
    assert_eq!(cell.points().len(), 4);
    // All four edges are border edges owned by site 0.
    assert_eq!(tess.edges().len(), 4);
    let mut sides: Vec<i32> = tess.edges().iter().map(|e| e.site_right).collect();
    sides.sort();
    assert_eq!(
        sides,
        vec![BOX_ID_LEFT, BOX_ID_TOP, BOX_ID_RIGHT, BOX_ID_BOTTOM]
    );
}

#[test]
fn test_two_stacked_sites_split_horizontally() {
    let tess = tessellate(
        &[500.0, 700.0, 500.0, 300.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    let interior: Vec<_> = tess
        .edges()
        .iter()
        .filter(|e| e.site_left >= 0 && e.site_right >= 0)
        .collect();
    assert_eq!(interior.len(), 1);
    let e = interior[0];
    assert!((e.start.y - 500.0).abs() < 1e-9);
    assert!((e.end.y - 500.0).abs() < 1e-9);
    assert!((e.start.distance(e.end) - 1000.0).abs() < 1e-9);
    assert!((tess.cell(0).unwrap().area() - 500_000.0).abs() < 1e-6);
    assert!((tess.cell(1).unwrap().area() - 500_000.0).abs() < 1e-6);
}

#[test]
fn test_two_diagonal_sites_split_along_the_diagonal() {
    let tess = tessellate(
        &[250.0, 250.0, 750.0, 750.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    // The bisector runs corner to corner.
    assert!(has_vertex(&tess, Point::new(0.0, 1000.0)));
    assert!(has_vertex(&tess, Point::new(1000.0, 0.0)));
    assert!((tess.cell(0).unwrap().area() - 500_000.0).abs() < 1e-6);
    assert!((tess.cell(1).unwrap().area() - 500_000.0).abs() < 1e-6);
}

#[test]
fn test_four_quadrant_sites() {
    let tess = tessellate(
        &[250.0, 250.0, 750.0, 250.0, 250.0, 750.0, 750.0, 750.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    assert_eq!(tess.count_cells(), 4);
    for cell in tess.cells() {
        assert!((cell.area() - 250_000.0).abs() < 1e-6);
        assert_eq!(cell.points().len(), 4);
    }
    // The four interior edges all meet at the center.
    assert!(has_vertex(&tess, Point::new(500.0, 500.0)));
    // Cocircular sites must not leave a spurious zero-length edge.
    for e in tess.edges() {
        assert!(e.start.distance(e.end) > 1e-9);
    }
}

#[test]
fn test_collinear_horizontal_row() {
    let tess = tessellate(
        &[100.0, 500.0, 400.0, 500.0, 700.0, 500.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    // Three vertical slabs: [0,250], [250,550], [550,1000].
    let areas: Vec<f64> = tess.cells().iter().map(|c| c.area()).collect();
    assert!((areas[0] - 250_000.0).abs() < 1e-6);
    assert!((areas[1] - 300_000.0).abs() < 1e-6);
    assert!((areas[2] - 450_000.0).abs() < 1e-6);
}

#[test]
fn test_collinear_vertical_column() {
    let tess = tessellate(
        &[500.0, 100.0, 500.0, 400.0, 500.0, 700.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    let areas: Vec<f64> = tess.cells().iter().map(|c| c.area()).collect();
    assert!((areas[0] - 250_000.0).abs() < 1e-6);
    assert!((areas[1] - 300_000.0).abs() < 1e-6);
    assert!((areas[2] - 450_000.0).abs() < 1e-6);
}

#[test]
fn test_site_on_the_border_and_corner() {
    // Sites sitting exactly on the boundary are legal input.
    let tess = tessellate(
        &[0.0, 0.0, 1000.0, 1000.0, 500.0, 0.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    assert_eq!(tess.count_cells(), 3);
    let total: f64 = tess.cells().iter().map(|c| c.area()).sum();
    assert!((total - 1_000_000.0).abs() < 1e-6);
    for cell in tess.cells() {
        assert!(cell.contains(cell.site(), 1e-6));
    }
}

#[test]
fn test_no_borders_keeps_only_interior_edges() {
    let sites = [250.0, 250.0, 750.0, 250.0, 250.0, 750.0, 750.0, 750.0];
    let closed = tessellate(&sites, unit_box(), BorderMode::ClosedBorders).unwrap();
    let open = tessellate(&sites, unit_box(), BorderMode::NoBorders).unwrap();

    assert!(open.edges().iter().all(|e| e.site_right >= 0));
    let closed_interior = closed
        .edges()
        .iter()
        .filter(|e| e.site_right >= 0)
        .count();
    assert_eq!(open.edges().len(), closed_interior);
    assert!(open.cells().iter().all(|c| c.is_empty()));
}

#[test]
fn test_interior_edges_are_equidistant_bisectors() {
    let sites = [312.0, 204.0, 655.0, 810.0, 140.0, 920.0, 880.0, 330.0];
    let tess = tessellate(&sites, unit_box(), BorderMode::ClosedBorders).unwrap();
    let points: Vec<Point> = sites
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect();
    for e in tess.edges() {
        if e.site_left < 0 || e.site_right < 0 {
            continue;
        }
        let (l, r) = (points[e.site_left as usize], points[e.site_right as usize]);
        let mid = (e.start + e.end) * 0.5;
        assert!(
            (mid.distance(l) - mid.distance(r)).abs() < 1e-6,
            "edge between {} and {} is not on their bisector",
            e.site_left,
            e.site_right
        );
    }
}

#[test]
fn test_duplicate_sites() {
    let tess = tessellate(
        &[300.0, 300.0, 700.0, 700.0, 300.0, 300.0, 300.0, 300.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    assert_eq!(tess.count_sites(), 4);
    assert_eq!(tess.count_cells(), 4);
    assert!(!tess.cell(0).unwrap().is_empty());
    assert!(!tess.cell(1).unwrap().is_empty());
    assert!(tess.cell(2).unwrap().is_empty());
    assert!(tess.cell(3).unwrap().is_empty());
    let total: f64 = tess.cells().iter().map(|c| c.area()).sum();
    assert!((total - 1_000_000.0).abs() < 1e-6);
}

#[test]
fn test_input_validation_errors() {
    assert!(matches!(
        tessellate(&[1.0], unit_box(), BorderMode::ClosedBorders),
        Err(VoronoiError::OddCoordinates { len: 1 })
    ));
    assert!(matches!(
        tessellate(
            &[500.0, 500.0, f64::INFINITY, 10.0],
            unit_box(),
            BorderMode::ClosedBorders
        ),
        Err(VoronoiError::NonFiniteSite { index: 1, .. })
    ));
    assert!(matches!(
        tessellate(&[-5.0, 500.0], unit_box(), BorderMode::ClosedBorders),
        Err(VoronoiError::SiteOutOfBounds { index: 0, .. })
    ));
    assert!(matches!(
        Tessellation::new(
            BoundingBox::new(0.0, 0.0, f64::NAN, 10.0),
            BorderMode::ClosedBorders
        ),
        Err(VoronoiError::InvalidBounds { .. })
    ));
}

#[test]
fn test_close_site_pair_still_closes_cells() {
    // Two sites a hair apart produce a razor-thin slab but all cells must
    // still close and tile the box.
    let tess = tessellate(
        &[500.0, 500.0, 500.0 + 1e-6, 500.0, 100.0, 100.0],
        unit_box(),
        BorderMode::ClosedBorders,
    )
    .unwrap();
    let total: f64 = tess.cells().iter().map(|c| c.area()).sum();
    assert!((total - 1_000_000.0).abs() < 1e-3);
}

#[test]
fn test_determinism() {
    let sites = [
        113.0, 207.5, 886.25, 332.0, 407.0, 775.5, 641.0, 98.0, 250.0, 511.0,
    ];
    let a = tessellate(&sites, unit_box(), BorderMode::ClosedBorders).unwrap();
    let b = tessellate(&sites, unit_box(), BorderMode::ClosedBorders).unwrap();
    assert_eq!(a.edges().len(), b.edges().len());
    for (ea, eb) in a.edges().iter().zip(b.edges()) {
        assert_eq!(ea.start, eb.start);
        assert_eq!(ea.end, eb.end);
        assert_eq!(ea.site_left, eb.site_left);
        assert_eq!(ea.site_right, eb.site_right);
    }
    for (ca, cb) in a.cells().iter().zip(b.cells()) {
        assert_eq!(ca.points(), cb.points());
    }
}
