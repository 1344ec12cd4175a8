//! Runs the three placement strategies over one hole list.
//!
//! The list traces every splice, so running this with the default
//! filter shows the bookkeeping behind each decision.

use log::{LevelFilter, info};
use region_list::{Block, Placement, RegionList};

fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .init();

    let mut holes = RegionList::new();
    for hole in [
        Block::free(200, 449),
        Block::free(0, 99),
        Block::free(150, 169),
    ] {
        holes.insert_by_address(hole);
    }
    info!("holes: {holes:?}");

    for placement in [Placement::FirstFit, Placement::BestFit, Placement::WorstFit] {
        match placement.find_in(&holes, 15) {
            Some(block) => info!("{placement} would take {block}"),
            None => info!("{placement} found nothing"),
        }
    }

    // Serve one request first-fit style: unlink the hole, keep what the
    // request needs, and list the rest again.
    let request = 40;
    if let Some(hole) = Placement::FirstFit.find_in(&holes, request).cloned() {
        let _ = holes.remove_block(&hole);
        let granted = Block::held_by(1, hole.start(), hole.start() + request - 1);
        holes.insert_by_address(Block::free(hole.start() + request, hole.end()));
        info!("granted {granted}");
    }
    info!("holes after the grant: {holes:?}");

    // And the release when the process exits.
    let done = Block::held_by(1, 0, 39);
    info!("pid 1 exits, returning {done}");
    holes.insert_by_address(Block::free(done.start(), done.end()));
    info!("holes after the release: {holes:?}");
}
