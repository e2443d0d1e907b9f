use super::*;

#[test]
fn term_factory_builds_unboosted_leaf() {
    let plan = term("name", "sofia");

    assert_eq!(plan, Plan::term("name", "sofia"));
    assert_eq!(plan.boost(), None);
    assert!(plan.queries().is_empty());
}

#[test]
fn set_boost_reaches_every_variant() {
    let mut plans = vec![
        Plan::term("a", "1"),
        PlanAlgebra.conjunction(vec![]).into(),
        PlanAlgebra.disjunction(vec![]).into(),
        PlanAlgebra.dis_max(0.1, vec![]).into(),
    ];

    for plan in &mut plans {
        plan.set_boost(3.0);
    }

    assert!(plans.iter().all(|p| p.boost() == Some(3.0)));
}

#[test]
fn exclusion_is_not_a_child() {
    let mut and = PlanAlgebra.conjunction(vec![Plan::term("a", "1")]);
    and.set_exclusion(Plan::term("b", "2"));
    let plan = Plan::from(and);

    assert_eq!(plan.queries(), &[Plan::term("a", "1")]);
    let Plan::And(and) = plan else {
        panic!("expected and plan");
    };
    assert_eq!(and.not.as_deref(), Some(&Plan::term("b", "2")));
}

#[test]
fn algebra_through_reference() {
    let algebra = &PlanAlgebra;
    let or = QueryAlgebra::disjunction(&algebra, vec![Plan::term("a", "1")]);

    assert_eq!(or.queries, vec![Plan::term("a", "1")]);
}

#[test]
fn dump_leaf() {
    let mut plan = Plan::term("name", "sofia");
    insta::assert_snapshot!(plan.to_string(), @"term name:sofia");

    plan.set_boost(2.5);
    insta::assert_snapshot!(plan.to_string(), @"term name:sofia ^2.5");
}

#[test]
fn dump_nested() {
    let mut dis_max = PlanAlgebra.dis_max(0.3, vec![Plan::term("a", "1"), Plan::term("a", "2")]);
    dis_max.set_boost(2.0);

    let mut and = PlanAlgebra.conjunction(vec![
        Plan::term("status", "active"),
        PlanAlgebra
            .disjunction(vec![Plan::term("x", "1"), dis_max.into()])
            .into(),
    ]);
    and.set_exclusion(Plan::term("deleted", "true"));

    insta::assert_snapshot!(Plan::from(and).to_string(), @r"
    and
      term status:active
      or
        term x:1
        dismax tiebreaker=0.3 ^2
          term a:1
          term a:2
      not
        term deleted:true
    ");
}

#[test]
fn dump_empty_conjunction() {
    let plan: Plan = PlanAlgebra.conjunction(vec![]).into();
    insta::assert_snapshot!(plan.to_string(), @"and");
}
