//! End-to-end pipeline across modules:
//! composite statement → expansion → lowering → fact base query.

use nxl_core::{
    EntityRegistry, FactBase, FlatTripletStatement, MainVerb, ModalVerb, Modality, Object,
    StatementValue, SymbolObject, Term, TripletFact, builtins, expand_attribute_list,
    expand_verb_list, lower, modal_verb, new_error,
};

fn list(items: &[&str]) -> StatementValue {
    StatementValue::List(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn verb_expansion_populates_fact_base() {
    let mut entities = EntityRegistry::new();
    let david = entities.create_named("david", "Person");

    let composite =
        FlatTripletStatement::new("def", david, "COULD", "how:fast", list(&["run", "eat", "drive"]));
    let atomic = expand_verb_list(&composite);

    let mut kb = FactBase::new();
    kb.extend(atomic.iter().map(|s| lower(s, &entities)));

    assert_eq!(kb.len(), 3);
    let pattern = TripletFact::new(
        Term::symbol("david"),
        Term::variable("verb"),
        Term::symbol("how:fast"),
    );
    let rendered: Vec<String> = kb.find(&pattern).iter().map(|f| f.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "(david <action:COULD:run> how:fast)",
            "(david <action:COULD:eat> how:fast)",
            "(david <action:COULD:drive> how:fast)",
        ]
    );

    // The modal tag survives expansion and still classifies.
    let modal = ModalVerb::from_raw(&atomic[0].verb.modal_verb);
    assert_eq!(modal.modality(), Some(Modality::Ability));
}

#[test]
fn attribute_expansion_then_verb_expansion() {
    let mut entities = EntityRegistry::new();
    let david = entities.create_named("david", "Person");

    let composite = FlatTripletStatement::new("def", david, "do", "how", list(&["fast", "silently"]))
        .with_main_verb(MainVerb::branch("run"));

    let by_attribute = expand_attribute_list(&composite);
    assert_eq!(by_attribute.len(), 2);

    // Attribute branches keep the list statement, so each can be expanded again by verb.
    let fully: Vec<FlatTripletStatement> = by_attribute.iter().flat_map(expand_verb_list).collect();
    assert_eq!(fully.len(), 4);
    assert_eq!(fully[0].object.condition, "fast");
    assert_eq!(fully[3].object.condition, "silently");
    assert!(fully.iter().all(|s| !s.is_composite()));

    let entity = entities.get(david).unwrap();
    let described = fully[1].verb.main_verb.invoke(entity).unwrap();
    assert_eq!(described, Object::string("david is silently"));
}

#[test]
fn atomic_statement_passes_through_both_expansions() {
    let mut entities = EntityRegistry::new();
    let car = entities.create_named("Car", "Vehicle");
    let stmt = FlatTripletStatement::new(
        "fact",
        car,
        "MUST",
        "WHERE",
        StatementValue::Scalar("stop".into()),
    );

    assert_eq!(expand_verb_list(&stmt), vec![stmt.clone()]);
    assert_eq!(expand_attribute_list(&stmt), vec![stmt.clone()]);
    assert_eq!(
        lower(&stmt, &entities).to_string(),
        "(Car <action:MUST:stop> WHERE)"
    );
}

#[test]
fn symbol_members_hold_builtins_and_facts() {
    let mut cli = SymbolObject::new("cli");
    for (name, builtin) in builtins::registry() {
        cli.set_member(name, Object::Builtin(builtin));
    }

    let typeof_result = match cli.get_member("typeof") {
        Object::Builtin(b) => b.call(&[Object::Number(3)]),
        other => new_error!("not callable: {}", other.render()),
    };
    assert_eq!(typeof_result, Object::string("NUMBER"));
    assert!(cli.get_member("exit").is_null());

    let fact = TripletFact::new(Term::symbol("cli"), Term::symbol("has"), Term::variable("m"));
    cli.set_member("shape", Object::Triplet(fact));
    assert_eq!(cli.get_member("shape").render(), "(cli has ?m)");
}

#[test]
fn modal_labels_for_diagnostics() {
    assert_eq!(modal_verb("MUST"), "MUST");
    let label = modal_verb("could");
    assert!(label.contains("Unknown Modal Verb") && label.contains("could"));
}
