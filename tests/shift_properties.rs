use mapshift::prelude::*;

fn sample_positions() -> Vec<[f64; 2]> {
    let mut positions = Vec::new();
    for lon in [-180.0, -179.5, -73.9, 0.0, 10.0, 120.25, 180.0] {
        for lat in [-90.0, -89.9, -33.7, 0.0, 5.2, 80.0, 90.0] {
            positions.push([lon, lat]);
        }
    }
    positions
}

fn sample_offsets() -> Vec<Offset> {
    let mut offsets = Vec::new();
    for lat in [-180.0, -95.5, -20.0, 0.0, 0.4, 20.0, 180.0] {
        for lon in [-180.0, -30.0, 0.0, 7.5, 180.0] {
            offsets.push(Offset::new(lat, lon));
        }
    }
    offsets
}

#[test]
fn shifted_positions_stay_on_the_globe() {
    let shape = Shape::new(GeoJsonGeometry::MultiPoint {
        coordinates: sample_positions(),
    });
    for offset in sample_offsets() {
        let moved = shift_by(&shape, &offset);
        for [lon, lat] in moved.geometry.positions() {
            assert!((-180.0..=180.0).contains(&lon), "lon {} for {:?}", lon, offset);
            assert!((-90.0..=90.0).contains(&lat), "lat {} for {:?}", lat, offset);
        }
    }
}

#[test]
fn zero_shift_keeps_coordinates_and_nesting() {
    let geometries = vec![
        GeoJsonGeometry::Point {
            coordinates: [-47.9, -15.8],
        },
        GeoJsonGeometry::LineString {
            coordinates: vec![[0.0, 0.0], [1.0, 1.0]],
        },
        GeoJsonGeometry::MultiPolygon {
            coordinates: vec![
                vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                vec![
                    vec![[10.0, 10.0], [20.0, 10.0], [20.0, 20.0], [10.0, 10.0]],
                    vec![[12.0, 12.0], [13.0, 12.0], [13.0, 13.0], [12.0, 12.0]],
                ],
            ],
        },
    ];
    for geometry in geometries {
        let shape = Shape::new(geometry);
        let same = shift(&shape, 0.0, 0.0);
        assert_eq!(same.geometry.type_name(), shape.geometry.type_name());
        assert!(same.geometry.same_structure(&shape.geometry));
        for (a, b) in shape
            .geometry
            .positions()
            .iter()
            .zip(same.geometry.positions())
        {
            assert!((a[0] - b[0]).abs() < 1e-12 && (a[1] - b[1]).abs() < 1e-12);
        }
    }
}

#[test]
fn near_pole_latitude_clamps() {
    let shape = Shape::new(GeoJsonGeometry::Point {
        coordinates: [10.0, 80.0],
    });
    let moved = shift(&shape, 20.0, 0.0);
    assert_eq!(
        moved.geometry,
        GeoJsonGeometry::Point {
            coordinates: [10.0, 90.0]
        }
    );
}

#[test]
fn polygon_shift_preserves_nesting() {
    let shape = Shape::new(GeoJsonGeometry::Polygon {
        coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
    });
    let moved = shift(&shape, 5.0, 5.0);
    assert_eq!(
        moved.geometry,
        GeoJsonGeometry::Polygon {
            coordinates: vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]]],
        }
    );
}

#[test]
fn drag_offsets_never_exceed_limit() {
    let mut controller = DragController::default();
    for (dx, dy) in [(10_000.0, -10_000.0), (-450.1, 450.1), (1.0, -1.0)] {
        controller.process_input(&InputEvent::DragStart {
            position: Point::new(0.0, 0.0),
        });
        controller.process_input(&InputEvent::Drag {
            position: Point::new(dx, dy),
        });
        controller.process_input(&InputEvent::DragEnd);
        let offset = controller.offset();
        assert!(offset.lat.abs() <= 180.0 && offset.lon.abs() <= 180.0);
    }
    // pinned at +180, pulled back 180.04, then nudged 0.4
    assert!((controller.offset().lat - 0.36).abs() < 1e-9);
    assert!((controller.offset().lon - 0.36).abs() < 1e-9);
}

#[test]
fn drag_up_twenty_pixels_is_eight_degrees() {
    let mut controller = DragController::default();
    controller.process_input(&InputEvent::DragStart {
        position: Point::new(50.0, 100.0),
    });
    controller.process_input(&InputEvent::Drag {
        position: Point::new(50.0, 80.0),
    });
    assert!((controller.offset().lat - 8.0).abs() < 1e-9);
}
