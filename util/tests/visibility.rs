use fov::{Field, GridMap};
use glam::{ivec2, IVec2};
use pretty_assertions::assert_eq;
use util::AsciiMap;

fn view(map: &str, radius: i32) -> String {
    env_logger::try_init().ok();

    let map: AsciiMap = map.parse().unwrap();
    let mut fov = Field::new();
    fov.compute(&map, map.start().unwrap(), radius);
    map.render(|p| fov.is_visible(p))
}

const OPEN: &str = "
.......
.......
.......
...@...
.......
.......
.......";

#[test]
fn open_field() {
    assert_eq!(
        view(OPEN, 3),
        "
 .....
 .....
 ..@..
 .....
 .....

"
    );
}

#[test]
fn single_wall() {
    let map = "
.......
.......
.......
...@#..
.......
.......
.......";

    assert_eq!(
        view(map, 3),
        "
 .....
 .....
 ..@#
 .....
 .....

"
    );
}

#[test]
fn zero_radius() {
    assert_eq!(view(OPEN, 0), "\n\n\n   @\n\n\n\n");
}

#[test]
fn closed_room() {
    let map = "
.......
.#####.
.#...#.
.#.@.#.
.#...#.
.#####.
.......";

    assert_eq!(
        view(map, 10),
        "
 #####
 #...#
 #.@.#
 #...#
 #####

"
    );
}

#[test]
fn holes_block_sight() {
    assert_eq!(view("@.. ...", 10), "@..\n");
}

#[test]
fn visible_cells_are_on_map() {
    let map: AsciiMap = "
   ###########
   #.........#
   #..#...+..#####
   #..#..@.......#
   #.....#...#####
   ###########"
        .parse()
        .unwrap();

    let mut fov = Field::new();
    for radius in [0, 1, 2, 5, 8, 20] {
        fov.compute(&map, map.start().unwrap(), radius);
        assert!(fov.is_visible(map.start().unwrap()));
        assert!(fov.iter().all(|p| map.in_bounds(p)));

        let indices: Vec<(i32, i32)> =
            (&fov).into_iter().map(|p| map.index(p)).collect();
        assert!(indices.iter().all(|&(i, w)| w == 15 && (0..90).contains(&i)));
    }
}

#[test]
fn moving_viewer() {
    let map: AsciiMap = "
#########
#.......#
#.......#
####.####
#.......#
#.......#
#########"
        .parse()
        .unwrap();

    let mut fov = Field::new();
    fov.compute(&map, ivec2(1, 1), 10);
    assert!(fov.is_visible([7, 2]));
    assert!(!fov.is_visible([1, 4]));

    // Step into the doorway, both rooms open up.
    fov.compute(&map, ivec2(4, 3), 10);
    assert_eq!(fov.origin(), Some(ivec2(4, 3)));
    assert!(fov.is_visible([4, 1]));
    assert!(fov.is_visible([4, 5]));
    assert!(!fov.is_visible([0, 3]));
    assert!(fov.is_visible([3, 3]));

    let seen: Vec<IVec2> = fov.iter().filter(|p| p.y == 3).collect();
    assert_eq!(seen.len(), 3);
}
