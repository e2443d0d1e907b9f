use super::run_common::{QueryArgs, compile_plan_or_exit};

pub type DumpArgs = QueryArgs;

pub fn run(args: DumpArgs) {
    let plan = compile_plan_or_exit(&args);
    println!("{plan}");
}
