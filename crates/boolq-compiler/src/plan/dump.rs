//! Indented text dump of compiled plans.
//!
//! ```text
//! and ^2
//!   term status:active
//!   not
//!     term deleted:true
//! ```

use std::fmt::{self, Display, Formatter};

use super::Plan;

const INDENT: usize = 2;

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_plan(f, self, 0)
    }
}

fn write_plan(f: &mut Formatter<'_>, plan: &Plan, indent: usize) -> fmt::Result {
    // Only the root sits at column 0, so it is the only line without a
    // preceding newline.
    if indent > 0 {
        writeln!(f)?;
    }
    write!(f, "{:indent$}", "")?;

    match plan {
        Plan::Term(t) => write!(f, "term {}:{}", t.field, t.value)?,
        Plan::And(_) => f.write_str("and")?,
        Plan::Or(_) => f.write_str("or")?,
        Plan::DisMax(d) => write!(f, "dismax tiebreaker={}", d.tiebreaker)?,
    }
    if let Some(boost) = plan.boost() {
        write!(f, " ^{boost}")?;
    }

    for child in plan.queries() {
        write_plan(f, child, indent + INDENT)?;
    }

    if let Plan::And(and) = plan
        && let Some(not) = &and.not
    {
        writeln!(f)?;
        write!(f, "{:width$}not", "", width = indent + INDENT)?;
        write_plan(f, not, indent + 2 * INDENT)?;
    }

    Ok(())
}
