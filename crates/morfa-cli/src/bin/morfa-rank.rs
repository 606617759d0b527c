use std::process::ExitCode;

use morfa_core::input::InputShape;

fn main() -> ExitCode {
    morfa_cli::run(InputShape::RankPosition)
}
