// tests/language.rs
use robot_maze::{
    Instruction, LanguageConfig, Program, Rejection, SyntaxClass, Validator, check_length,
    check_symbols, classify_syntax, compile,
};

fn compiled(source: &str) -> Program {
    let validator = Validator::default();
    let checked = validator.validate(source).unwrap();
    compile(&checked)
}

#[test]
fn test_disallowed_characters() {
    assert_eq!(
        check_symbols("+ +"),
        Err(Rejection::DisallowedCharacter {
            character: ' ',
            position: 1
        })
    );
    assert_eq!(
        check_symbols("a1A"),
        Err(Rejection::DisallowedCharacter {
            character: '1',
            position: 1
        })
    );
    assert_eq!(
        check_symbols("é"),
        Err(Rejection::DisallowedCharacter {
            character: 'é',
            position: 0
        })
    );
    assert_eq!(check_symbols("<>+-?!azAZ"), Ok(()));
    assert_eq!(check_symbols(""), Ok(()));
}

#[test]
fn test_length_cap() {
    assert_eq!(check_length(&"<".repeat(32), 32), Ok(()));
    assert_eq!(
        check_length(&"<".repeat(33), 32),
        Err(Rejection::TooLong {
            length: 33,
            limit: 32
        })
    );
}

#[test]
fn test_charset_checked_before_length() {
    let validator = Validator::default();
    let source = format!("{}#", "+".repeat(40));
    assert_eq!(
        validator.validate(&source),
        Err(Rejection::DisallowedCharacter {
            character: '#',
            position: 40
        })
    );
}

#[test]
fn test_syntax_classes() {
    assert_eq!(classify_syntax("??"), SyntaxClass::MoreConditionsInRow);
    assert_eq!(classify_syntax("+?!+"), SyntaxClass::MoreConditionsInRow);
    assert_eq!(classify_syntax("+?"), SyntaxClass::EndsWithCondition);
    assert_eq!(classify_syntax("A"), SyntaxClass::NoJumpGoal);
    assert_eq!(classify_syntax("aa"), SyntaxClass::UncertainJumpGoal);
    assert_eq!(classify_syntax("a+"), SyntaxClass::UnnecessaryJumpGoal);
    assert_eq!(classify_syntax("a+A"), SyntaxClass::Valid);
    assert_eq!(classify_syntax("aAA"), SyntaxClass::Valid);
    assert_eq!(classify_syntax("?+!<"), SyntaxClass::Valid);
    assert_eq!(classify_syntax(""), SyntaxClass::Valid);
}

#[test]
fn test_syntax_class_precedence() {
    // Scan-time checks fire at the first offending character.
    assert_eq!(classify_syntax("aa??"), SyntaxClass::UncertainJumpGoal);
    assert_eq!(classify_syntax("??aa"), SyntaxClass::MoreConditionsInRow);
    // Then the trailing conditional, then dangling references, then unused anchors.
    assert_eq!(classify_syntax("B?"), SyntaxClass::EndsWithCondition);
    assert_eq!(classify_syntax("a?"), SyntaxClass::EndsWithCondition);
    assert_eq!(classify_syntax("aB"), SyntaxClass::NoJumpGoal);
}

#[test]
fn test_validator_verdicts() {
    let validator = Validator::default();

    assert_eq!(
        validator.validate("??"),
        Err(Rejection::Syntax(SyntaxClass::MoreConditionsInRow))
    );
    assert_eq!(
        validator.validate("A"),
        Err(Rejection::Syntax(SyntaxClass::NoJumpGoal))
    );

    let unused = validator.validate("a+").unwrap();
    assert_eq!(unused.syntax(), SyntaxClass::UnnecessaryJumpGoal);
    assert_eq!(unused.text(), "a+");

    assert_eq!(
        validator.validate("a<A").unwrap().syntax(),
        SyntaxClass::Valid
    );
}

#[test]
fn test_validator_uses_configured_length() {
    let validator = Validator::new(LanguageConfig {
        max_source_len: 4,
        ..Default::default()
    });
    assert!(validator.validate("++++").is_ok());
    assert_eq!(
        validator.validate("+++++"),
        Err(Rejection::TooLong {
            length: 5,
            limit: 4
        })
    );
}

#[test]
fn test_compile_movement_symbols() {
    assert_eq!(
        compiled("<>+-").instructions(),
        &[
            Instruction::TurnLeft,
            Instruction::TurnRight,
            Instruction::Forward,
            Instruction::Backward,
        ]
    );
    assert!(compiled("").is_empty());
}

#[test]
fn test_compile_conditionals_skip_one() {
    assert_eq!(
        compiled("?+!<").instructions(),
        &[
            Instruction::JumpIfNotWall(2),
            Instruction::Forward,
            Instruction::JumpIfWall(4),
            Instruction::TurnLeft,
        ]
    );
}

#[test]
fn test_compile_backward_label() {
    assert_eq!(
        compiled("a+A").instructions(),
        &[Instruction::Forward, Instruction::Jump(0)]
    );
}

#[test]
fn test_compile_forward_label() {
    // The anchor sits after its reference.
    assert_eq!(
        compiled("A+a<").instructions(),
        &[Instruction::Jump(2), Instruction::Forward, Instruction::TurnLeft]
    );
}

#[test]
fn test_compile_interleaved_labels() {
    assert_eq!(
        compiled("aBb+A").instructions(),
        &[Instruction::Jump(1), Instruction::Forward, Instruction::Jump(0)]
    );
}

#[test]
fn test_compile_anchor_at_end_targets_length() {
    let program = compiled("+Aa");
    assert_eq!(
        program.instructions(),
        &[Instruction::Forward, Instruction::Jump(2)]
    );
    assert_eq!(program.get(1).and_then(Instruction::target), Some(program.len()));
}

#[test]
fn test_compile_conditional_before_label() {
    // Labels emit nothing, so the skip lands on the instruction after the jump.
    assert_eq!(
        compiled("?a+A").instructions(),
        &[
            Instruction::JumpIfNotWall(2),
            Instruction::Forward,
            Instruction::Jump(1),
        ]
    );
}

#[test]
fn test_conditional_before_trailing_anchors_skips_to_end() {
    // Nothing is emitted after the conditional, so its skip lands exactly on the end.
    assert_eq!(
        compiled("+?a").instructions(),
        &[Instruction::Forward, Instruction::JumpIfNotWall(2)]
    );
    assert_eq!(compiled("!ab").instructions(), &[Instruction::JumpIfWall(1)]);
}

#[test]
fn test_jump_targets_in_range() {
    for source in ["a<?>?>?>+A", "A+a<", "aBb+A", "+Aa", "!a-?+<A", "+?a", "!ab"] {
        let program = compiled(source);
        for instruction in program.instructions() {
            if let Some(target) = instruction.target() {
                assert!(target <= program.len(), "{source}: {instruction:?}");
            }
        }
    }
}
