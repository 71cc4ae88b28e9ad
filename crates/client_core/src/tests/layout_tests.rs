use super::*;

#[test]
fn endpoints_are_exact_for_every_floor_count() {
    for floor_count in 2..=64 {
        let mapper = FloorMapper::new(floor_count, 12.3, 687.7).expect("mapper");
        assert_eq!(mapper.floor_position(0), 687.7);
        assert_eq!(mapper.floor_position(floor_count - 1), 12.3);
    }
}

#[test]
fn position_strictly_decreases_with_floor() {
    for floor_count in 2..=40 {
        let mapper = LayoutConfig::new(800.0, 700.0, floor_count)
            .mapper()
            .expect("mapper");
        for floor in 1..floor_count {
            assert!(
                mapper.floor_position(floor) < mapper.floor_position(floor - 1),
                "floor {floor} of {floor_count} is not above floor {}",
                floor - 1
            );
        }
    }
}

#[test]
fn fractional_floors_fall_between_neighbours() {
    let mapper = FloorMapper::new(4, 0.0, 300.0).expect("mapper");
    assert_eq!(mapper.floor_position(1), 200.0);
    assert_eq!(mapper.floor_position(2), 100.0);
    assert_eq!(mapper.position(1.5), 150.0);
    assert_eq!(mapper.spacing(), 100.0);
}

#[test]
fn rejects_single_floor_building() {
    assert_eq!(
        FloorMapper::new(1, 0.0, 100.0),
        Err(LayoutError::TooFewFloors { floor_count: 1 })
    );
    assert_eq!(
        LayoutConfig::new(800.0, 700.0, 0).mapper(),
        Err(LayoutError::TooFewFloors { floor_count: 0 })
    );
}

#[test]
fn rejects_inverted_bounds_and_empty_canvas() {
    assert!(matches!(
        FloorMapper::new(4, 100.0, 10.0),
        Err(LayoutError::InvalidBounds { .. })
    ));
    assert!(matches!(
        LayoutConfig::new(0.0, 700.0, 4).mapper(),
        Err(LayoutError::InvalidCanvas { .. })
    ));
}

#[test]
fn default_bounds_leave_half_a_floor_of_headroom() {
    let mapper = LayoutConfig::new(800.0, 700.0, 4).mapper().expect("mapper");
    assert_eq!(mapper.top(), 87.5);
    assert_eq!(mapper.bottom(), 612.5);
}
