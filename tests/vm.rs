use sabdastra::{
    compile_source,
    error::RuntimeError,
    mantra,
    run_source,
    toolchain::{
        compiler::{
            Program, compile,
            constant_pool::{ConstId, Constant, ConstantPool},
            instruction::Instruction,
        },
        value::Value,
        vm::core::{Environment, MAX_CALL_DEPTH, Vm},
    },
};

fn output_of(src: &str) -> Vec<String> {
    run_source(src, &mut Environment::new()).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

/// Runs `src` expecting a runtime error, returning it with the lines printed
/// before it.
fn runtime_error(src: &str) -> (RuntimeError, Vec<String>) {
    let program = compile_source(src).unwrap_or_else(|e| panic!("Script failed to compile: {e}"));
    let mut vm = Vm::new(&program);
    match vm.run(&mut Environment::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => (e, vm.into_output()),
    }
}

fn run_program(program: &Program) -> Result<Vec<String>, RuntimeError> {
    let mut vm = Vm::new(program);
    vm.run(&mut Environment::new())?;
    Ok(vm.into_output())
}

#[test]
fn arithmetic_has_no_precedence() {
    assert_eq!(output_of("ch 1 + 2 * 3"), vec!["9"]);
    assert_eq!(output_of("ch 10 - 2 - 3"), vec!["5"]);
    assert_eq!(output_of("ch 2 * 3 + 4"), vec!["10"]);
}

#[test]
fn division_is_true_division() {
    assert_eq!(output_of("ch 7 / 2"), vec!["3.5"]);
    assert_eq!(output_of("ch 4 / 2"), vec!["2.0"]);
    assert_eq!(output_of("ch 1 / 4 * 2"), vec!["0.5"]);
}

#[test]
fn division_promotes_large_integers() {
    assert_eq!(output_of("ch 9007199254740993 / 1"), vec!["9007199254740992.0"]);
    assert_eq!(output_of("x = 9223372036854775807\nch x / 1"), vec!["9.223372036854776e+18"]);
    assert!(run_source("x = 9007199254740993\nch x / 3", &mut Environment::new()).is_ok());
}

#[test]
fn integers_and_reals_compare_exactly() {
    let src = "big = 9007199254740993\nhalf = big / 1\nch big == half\nch big > half\nch half < big";
    assert_eq!(output_of(src), vec!["False", "True", "True"]);

    let src = "even = 9007199254740994\nch even == even / 1\nch even / 1 != even";
    assert_eq!(output_of(src), vec!["True", "False"]);
}

#[test]
fn reals_print_like_the_transpiled_program() {
    assert_eq!(output_of("ch 1 / 10000\nch 1 / 100000\nch 3 / 200000"),
               vec!["0.0001", "1e-05", "1.5e-05"]);
    assert_eq!(output_of("ch 1000000000000000 / 1\nch 10000000000000000 / 1\nch 150000000000000000 / 1"),
               vec!["1000000000000000.0", "1e+16", "1.5e+17"]);
    assert_eq!(output_of("ch 2 / 3\nch 0 / 5"), vec!["0.6666666666666666", "0.0"]);
}

#[test]
fn counted_loop_runs_from_zero() {
    assert_eq!(output_of("yugma i in 3:\n    ch i"), vec!["0", "1", "2"]);
    assert!(output_of("yugma i in 0:\n    ch i").is_empty());
}

#[test]
fn loop_bound_is_an_expression() {
    assert_eq!(output_of("n = 1\nyugma i in n + 1:\n    ch i"), vec!["0", "1"]);
}

#[test]
fn conditional_branches() {
    let src = "yadi 1 == 1:\n    ch 'True'\nanya:\n    ch 'False'";
    assert_eq!(output_of(src), vec!["True"]);

    let src = "x = 5\nyadi x < 3:\n    ch 'small'\nanya:\n    ch 'large'";
    assert_eq!(output_of(src), vec!["large"]);

    assert!(output_of("yadi 0:\n    ch 'never'").is_empty());
    assert!(output_of("yadi '':\n    ch 'never'").is_empty());
}

#[test]
fn while_loop() {
    let src = "n = 0\nyatra n < 3:\n    ch n\n    n = n + 1";
    assert_eq!(output_of(src), vec!["0", "1", "2"]);
}

#[test]
fn strings() {
    assert_eq!(output_of("nama = 'Arjuna'\nch nama"), vec!["Arjuna"]);
    assert_eq!(output_of("ch 'Om' + 'Shanti'"), vec!["OmShanti"]);
    assert_eq!(output_of("ch 'a' == 'a'\nch 'a' < 'b'"), vec!["True", "True"]);
}

#[test]
fn comparisons_produce_booleans() {
    assert_eq!(output_of("ch 2 > 1\nch 2 != 2\nch 3 / 3 == 1"), vec!["True", "False", "True"]);
}

#[test]
fn unbound_variables_read_as_zero() {
    assert_eq!(output_of("ch ghost\nch ghost + 1"), vec!["0", "1"]);
}

#[test]
fn environment_is_caller_owned() {
    let mut env = Environment::new();
    env.set("count", Value::Integer(5));

    run_source("total = count * 2", &mut env).unwrap();
    assert_eq!(env.get("total"), Value::Integer(10));

    let output = run_source("ch total + 1", &mut env).unwrap();
    assert_eq!(output, vec!["11"]);
    assert_eq!(env.len(), 2);
    assert_eq!(env.lookup("total"), Some(&Value::Integer(10)));
    assert_eq!(env.lookup("ghost"), None);

    let mut names = env.iter().map(|(name, _)| name).collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, vec!["count", "total"]);
}

#[test]
fn reading_an_unbound_variable_does_not_bind_it() {
    let mut env = Environment::new();
    assert!(env.is_empty());

    run_source("ch ghost", &mut env).unwrap();
    assert!(env.is_empty());

    run_source("yugma i in 2:\n    ch i", &mut env).unwrap();
    assert!(!env.is_empty());
    assert_eq!(env.get("i"), Value::Integer(2));
}

#[test]
fn functions_with_parameters() {
    let src = "kar greet nama:\n    ch 'Namaste'\n    ch nama\ngreet 'Arjuna'\ngreet 'Bhima'";

    assert_eq!(output_of(src), vec!["Namaste", "Arjuna", "Namaste", "Bhima"]);
}

#[test]
fn recursion() {
    let src = "kar countdown n:\n    yadi n > 0:\n        ch n\n        n = n - 1\n        countdown n\ncountdown 3";

    assert_eq!(output_of(src), vec!["3", "2", "1"]);
}

#[test]
fn forward_declaration_alone_is_a_no_op() {
    assert_eq!(output_of("kar protect\nprotect\nch 'done'"), vec!["done"]);
}

#[test]
fn mantras_run() {
    for (name, expected) in [("gayatri", "Wisdom unlocked"), ("mahamrityunjaya", "Protection invoked")] {
        let program = compile(&mantra::lookup(name).unwrap()).unwrap();
        assert_eq!(run_program(&program).unwrap(), vec![expected], "mantra {name}");
    }
}

#[test]
fn division_by_zero_keeps_earlier_output() {
    let (err, output) = runtime_error("ch 'before'\nch 1 / 0\nch 'after'");

    assert_eq!(err, RuntimeError::DivisionByZero { pc: 4 });
    assert_eq!(output, vec!["before"]);
}

#[test]
fn division_by_zero_constant() {
    let mut constants = ConstantPool::new();
    let one = constants.intern(Constant::Integer(1));
    let zero = constants.intern(Constant::Integer(0));
    let program = Program { instructions: vec![Instruction::LoadConst(one),
                                               Instruction::LoadConst(zero),
                                               Instruction::Div,
                                               Instruction::Print],
                            constants };

    assert_eq!(run_program(&program), Err(RuntimeError::DivisionByZero { pc: 2 }));
}

#[test]
fn integer_overflow() {
    let (err, _) = runtime_error("ch 9223372036854775807 + 1");
    assert_eq!(err, RuntimeError::Overflow { pc: 2 });
}

#[test]
fn type_errors() {
    assert!(matches!(runtime_error("ch 'om' - 1").0, RuntimeError::TypeMismatch { pc: 2, .. }));
    assert!(matches!(runtime_error("ch 'om' < 1").0, RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("ch 'a' + 1").0, RuntimeError::TypeMismatch { .. }));
}

#[test]
fn unbounded_recursion_hits_the_call_depth_limit() {
    let (err, _) = runtime_error("kar f:\n    f\nf");

    assert_eq!(err,
               RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH,
                                                 pc:    1, });
}

#[test]
fn step_limit_stops_infinite_loops() {
    let program = compile_source("yatra 1:\n    ch 'again'").unwrap();
    let mut vm = Vm::new(&program).with_step_limit(50);

    let err = vm.run(&mut Environment::new()).unwrap_err();

    assert!(matches!(err, RuntimeError::StepLimitExceeded { limit: 50, .. }));
    assert_eq!(vm.steps(), 50);
    assert!(!vm.output().is_empty());
}

#[test]
fn malformed_programs_fail_cleanly() {
    let empty = ConstantPool::new();

    let program = Program { instructions: vec![Instruction::Return],
                            constants:    empty.clone(), };
    assert_eq!(run_program(&program), Err(RuntimeError::ReturnOutsideFunction { pc: 0 }));

    let program = Program { instructions: vec![Instruction::Print],
                            constants:    empty.clone(), };
    assert_eq!(run_program(&program), Err(RuntimeError::StackUnderflow { pc: 0 }));

    let program = Program { instructions: vec![Instruction::LoadConst(ConstId(3))],
                            constants:    empty, };
    assert_eq!(run_program(&program), Err(RuntimeError::UnknownConstant { id: 3, pc: 0 }));
}

#[test]
fn a_halted_vm_stays_halted() {
    let program = compile_source("ch 1").unwrap();
    let mut env = Environment::new();
    let mut vm = Vm::new(&program);

    vm.run(&mut env).unwrap();
    vm.run(&mut env).unwrap();

    assert_eq!(vm.output(), ["1"]);
}

#[test]
fn a_failed_vm_stays_halted() {
    let program = compile_source("ch 'before'\nch 1 / 0\nch 'after'").unwrap();
    let mut env = Environment::new();
    let mut vm = Vm::new(&program);

    assert_eq!(vm.run(&mut env), Err(RuntimeError::DivisionByZero { pc: 4 }));
    assert_eq!(vm.run(&mut env), Ok(()));
    assert_eq!(vm.output(), ["before"]);
}

#[test]
fn a_vm_stopped_by_its_step_limit_stays_halted() {
    let program = compile_source("yatra 1:\n    ch 'again'").unwrap();
    let mut env = Environment::new();
    let mut vm = Vm::new(&program).with_step_limit(10);

    assert!(vm.run(&mut env).is_err());
    let steps = vm.steps();

    assert_eq!(vm.run(&mut env), Ok(()));
    assert_eq!(vm.steps(), steps);
}
