use super::run_common::{QueryArgs, compile_plan_or_exit};

pub type CheckArgs = QueryArgs;

pub fn run(args: CheckArgs) {
    compile_plan_or_exit(&args);

    // Silent on success (like cargo check)
}
