use admatch::{
    interpreter::{
        matcher::{is_match, is_match_typed, rank, requirements_met},
        registry::TypeRegistry,
        value::Value,
    },
    parse,
};

#[test]
fn symmetric_match_requires_both_sides() {
    let job = parse("[ Memory = 1024; Requirements = other.Disk >= 100; ]").unwrap();
    let machine = parse("[ Disk = 500; Requirements = other.Memory >= 512; ]").unwrap();

    assert!(is_match(&job, &machine));
    assert!(is_match(&machine, &job)); // commutative

    let small = parse("[ Disk = 500; Requirements = other.Memory >= 4096; ]").unwrap();
    assert!(!is_match(&job, &small));
}

#[test]
fn absent_requirements_never_match() {
    let job = parse("[ Requirements = true; ]").unwrap();
    let bare = parse("[ Memory = 2048; ]").unwrap();

    assert!(requirements_met(&job, &bare));
    assert!(!requirements_met(&bare, &job));
    assert!(!is_match(&job, &bare));
}

#[test]
fn acceptance_demands_exactly_true() {
    let target = parse("[ Requirements = true; ]").unwrap();

    // Undefined: the referenced attribute exists on neither side.
    let undefined = parse("[ Requirements = other.Nope > 1; ]").unwrap();
    assert!(!requirements_met(&undefined, &target));

    // Error: the predicate divides by zero.
    let error = parse("[ Requirements = (1 / 0) == 1; ]").unwrap();
    assert!(!requirements_met(&error, &target));

    // Non-boolean results reject too.
    let numeric = parse("[ Requirements = 1; ]").unwrap();
    assert!(!requirements_met(&numeric, &target));
}

#[test]
fn scope_keywords_select_a_record() {
    let a = parse("[ Level = 3; Requirements = my.Level < other.Level; ]").unwrap();
    let b = parse("[ Level = 5; ]").unwrap();
    assert!(requirements_met(&a, &b));
    assert!(!requirements_met(&a, &a));

    // `self.` and `target.` are alternate spellings.
    let alt = parse("[ Level = 3; Requirements = self.Level < target.Level; ]").unwrap();
    assert!(requirements_met(&alt, &b));

    // An explicit `other.` reference is Undefined when absent there, even if
    // the owning record has the attribute.
    let strict = parse("[ Flag = true; Requirements = other.Flag; ]").unwrap();
    let empty = parse("[ ]").unwrap();
    assert!(!requirements_met(&strict, &empty));
}

#[test]
fn unscoped_names_fall_back_to_the_candidate() {
    // `Disk` is not in the job, so it resolves in the machine.
    let job = parse("[ Requirements = Disk >= 100; ]").unwrap();
    let machine = parse("[ Disk = 200; Requirements = true; ]").unwrap();
    assert!(requirements_met(&job, &machine));
}

#[test]
fn candidate_expressions_evaluate_in_their_own_record() {
    // FreeDisk in the machine refers to the machine's own attributes, even
    // though the job triggered its evaluation.
    let machine = parse("[ Disk = 300; Reserved = 50; FreeDisk = Disk - Reserved; ]").unwrap();
    let job = parse("[ Disk = 1; Requirements = other.FreeDisk == 250; ]").unwrap();

    assert!(requirements_met(&job, &machine));
}

#[test]
fn rank_evaluates_against_the_candidate() {
    let job = parse("[ Rank = other.Memory / 1024; Requirements = true; ]").unwrap();
    let machine = parse("[ Memory = 4096; ]").unwrap();

    assert_eq!(rank(&job, &machine), Value::Real(4.0));
    assert_eq!(rank(&machine, &job), Value::Undefined); // no Rank attribute

    let unrankable = parse("[ Rank = other.Missing; ]").unwrap();
    assert_eq!(rank(&unrankable, &machine), Value::Undefined);
}

#[test]
fn typed_matching_gates_on_the_registry() {
    let mut registry = TypeRegistry::new();
    registry.register("Job");
    registry.register("Machine");

    let job = parse("[ MyType = \"Job\"; TargetType = \"Machine\"; \
                       Requirements = other.Memory >= 512; ]").unwrap();
    let machine = parse("[ MyType = \"Machine\"; TargetType = \"Job\"; Memory = 1024; \
                           Requirements = true; ]").unwrap();

    assert!(is_match_typed(&registry, &job, &machine));

    // Same requirements, wrong declared type.
    let printer = parse("[ MyType = \"Printer\"; TargetType = \"Job\"; Memory = 1024; \
                           Requirements = true; ]").unwrap();
    registry.register("Printer");
    assert!(!is_match_typed(&registry, &job, &printer));
}

#[test]
fn untyped_records_are_not_gated() {
    let mut registry = TypeRegistry::new();
    registry.register("Job");
    registry.register("Machine");

    let typed = parse("[ MyType = \"Job\"; TargetType = \"Machine\"; \
                         Requirements = true; ]").unwrap();
    let untyped = parse("[ Requirements = true; ]").unwrap();

    assert!(is_match_typed(&registry, &typed, &untyped));
    assert!(is_match_typed(&registry, &untyped, &untyped));
}

#[test]
fn type_names_are_case_insensitive() {
    let mut registry = TypeRegistry::new();
    let number = registry.register("Machine");

    assert_eq!(registry.register("MACHINE"), number);
    assert_eq!(registry.lookup("machine"), Some(number));
    assert_eq!(registry.name_of(number), Some("Machine"));
}
