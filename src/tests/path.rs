use crate::*;
use std::convert::TryFrom;

fn sample_path() -> Path {
    let grid = world::map();
    greedy_best_first_search(&grid, world::START, Coord::new(8, 6), world::config())
        .unwrap()
        .into_path()
        .unwrap()
}

#[test]
fn display_matches_coordinate_list() {
    let path = sample_path();
    assert_eq!(
        path.to_string(),
        "[[1, 8], [2, 7], [3, 7], [4, 7], [5, 7], [6, 7], [7, 7], [8, 6]]"
    );
}

#[test]
fn walk_replays_directions() {
    let path = sample_path();
    let directions = path.directions().collect::<Vec<_>>();
    assert_eq!(directions.len(), path.len());
    assert_eq!(directions[0], Direction::NorthEast);
    assert_eq!(directions[1], Direction::East);

    let walked = PathWalk::new(path.start(), &directions)
        .map(|(coord, _)| coord)
        .collect::<Vec<_>>();
    assert_eq!(&walked[..], &path.coords()[1..]);
}

#[test]
fn direction_between_neighbours() {
    let origin = Coord::new(3, 3);
    assert_eq!(
        direction_between(origin, Coord::new(3, 2)),
        Some(Direction::North)
    );
    assert_eq!(
        direction_between(origin, Coord::new(2, 4)),
        Some(Direction::SouthWest)
    );
    assert_eq!(direction_between(origin, origin), None);
    assert_eq!(direction_between(origin, Coord::new(5, 3)), None);
}

#[test]
fn coordinate_lists_must_be_walkable() {
    assert_eq!(Path::try_from(Vec::new()), Err(Error::EmptyPath));
    assert_eq!(
        Path::try_from(vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(3, 1)]),
        Err(Error::NonAdjacentStep { index: 2 })
    );

    let single = Path::try_from(vec![Coord::new(4, 2)]).unwrap();
    assert_eq!(single.start(), single.goal());
    assert_eq!(single.len(), 0);
    assert!(single.is_empty());
    assert_eq!(single.directions().count(), 0);

    let path = sample_path();
    let rebuilt = Path::try_from(Vec::from(path.clone())).unwrap();
    assert_eq!(rebuilt, path);
}
