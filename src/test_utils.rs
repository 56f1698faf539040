pub const MAZE1_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/maze1.txt"
));

pub const MAZE2_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/maze2.txt"
));

pub const LOOPS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/loops.txt"
));

pub const WALLED_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/walled.txt"
));

pub const OPEN_3X3_TEXT: &str = "A  \n   \n  B\n";

pub const ISOLATED_START_TEXT: &str = "A# \n## \n  B\n";
