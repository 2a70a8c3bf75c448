//! Opens the safe model in a native window and plays the door animation
//! once. Expects the model at `assets/models/safe_small.glb` relative to the
//! working directory.

use vault_view::{ViewerOptions, run};

fn main() -> anyhow::Result<()> {
    run(ViewerOptions::default(), |handle| {
        handle.play(false);
    })
}
