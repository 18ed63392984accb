use std::{io::Write, path::PathBuf, time::Instant};

use anyhow::{bail, Context};
use clap::Parser;
use fov::{Field, GridMap};
use glam::{ivec2, IVec2};
use util::AsciiMap;

#[derive(Parser, Debug)]
#[command(about = "Show what can be seen from a point on a text map")]
struct Args {
    /// Map file, whitespace is outside the map.
    map: PathBuf,

    #[arg(long, value_name = "X,Y", value_parser = parse_pos)]
    /// Viewer position, defaults to the `@` on the map.
    pos: Option<IVec2>,

    #[arg(long, short, default_value = "8")]
    /// How far the viewer can see.
    radius: i32,

    #[arg(long, value_name = "GLYPHS", default_value = util::DEFAULT_WALLS)]
    /// Map glyphs that block sight.
    walls: String,

    #[arg(long)]
    /// Print visible cells as coordinates instead of drawing the map.
    list: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    /// Log more, repeat for even more.
    verbose: u8,
}

fn parse_pos(s: &str) -> anyhow::Result<IVec2> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y, got {s:?}");
    };
    Ok(ivec2(x.trim().parse()?, y.trim().parse()?))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the verbosity flags.
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} - {}",
            record.level(),
            record.target(),
            record.args()
        )
    })
    .init();

    let text = std::fs::read_to_string(&args.map)
        .with_context(|| format!("reading {}", args.map.display()))?;
    let map = AsciiMap::with_walls(&text, &args.walls)
        .with_context(|| format!("parsing {}", args.map.display()))?;
    log::info!("loaded {} map from {}", map.size(), args.map.display());

    let Some(pos) = args.pos.or(map.start()) else {
        bail!("no --pos given and the map has no {}", util::START);
    };
    if !map.in_bounds(pos) {
        log::warn!("viewer at {pos} is outside the map");
    }

    let now = Instant::now();
    let mut fov = Field::new();
    fov.compute(&map, pos, args.radius);
    log::debug!(
        "{} cells visible from {pos}, computed in {:.2?}",
        fov.len(),
        now.elapsed()
    );

    if args.list {
        let mut cells: Vec<IVec2> = fov.iter().collect();
        cells.sort_by_key(|p| (p.y, p.x));
        for p in cells {
            println!("{},{}", p.x, p.y);
        }
    } else {
        print!("{}", map.render(|p| fov.is_visible(p)));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn positions() {
        assert_eq!(parse_pos("3,4").unwrap(), ivec2(3, 4));
        assert_eq!(parse_pos(" -1, 12").unwrap(), ivec2(-1, 12));
        assert!(parse_pos("3").is_err());
        assert!(parse_pos("3,x").is_err());
        assert!(parse_pos("").is_err());
    }

    #[test]
    fn arguments() {
        let args =
            Args::try_parse_from(["shadowfov", "room.txt", "--pos", "2,3"])
                .unwrap();
        assert_eq!(args.pos, Some(ivec2(2, 3)));
        assert_eq!(args.radius, 8);
        assert_eq!(args.walls, util::DEFAULT_WALLS);
        assert!(!args.list);

        let args =
            Args::try_parse_from(["shadowfov", "room.txt", "-r", "3", "-vv"])
                .unwrap();
        assert_eq!(args.pos, None);
        assert_eq!(args.radius, 3);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn sample_map() {
        let map: AsciiMap =
            include_str!("../maps/two_rooms.txt").parse().unwrap();
        let start = map.start().unwrap();
        assert_eq!(start, ivec2(6, 3));

        let mut fov = Field::new();
        fov.compute(&map, start, 8);
        // Down the corridor, but not around the corner into the alcove.
        assert!(fov.is_visible([13, 3]));
        assert!(!fov.is_visible([5, 7]));
    }
}
