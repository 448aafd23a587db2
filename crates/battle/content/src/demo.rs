//! The built-in demo roster: a user-driven Warrior and an automated Bard on
//! team `a` against an automated Mage and Rogue on team `b`.

use battle_core::{Character, Move, MoveUseResult, PowerTransform, UserInput};

use crate::builders::{
    BuffActionBuilder, BuildError, CharacterBuilder, DamageActionBuilder, HealActionBuilder,
    ItemBuilder, MoveBuilder, MoveSetBuilder, ProtectActionBuilder,
    ProtectLimitChangeActionBuilder, TargetingBuilder,
};

/// Build the demo roster with `input` driving the Warrior.
pub fn demo_roster(input: impl UserInput + 'static) -> Result<Vec<Character>, BuildError> {
    Ok(vec![warrior(input)?, bard()?, mage()?, rogue()?])
}

/// Same roster with every character automated.
pub fn automated_demo_roster() -> Result<Vec<Character>, BuildError> {
    Ok(vec![
        warrior_base()?.automated().build()?,
        bard()?,
        mage()?,
        rogue()?,
    ])
}

// ============================================================================
// Team a
// ============================================================================

fn warrior(input: impl UserInput + 'static) -> Result<Character, BuildError> {
    warrior_base()?.user_controlled(input).build()
}

fn warrior_base() -> Result<CharacterBuilder, BuildError> {
    let moves = MoveSetBuilder::default()
        .with_move(sword_strike()?)
        .with_move(insistent_jab()?)
        .with_move(retaliate()?)
        .with_move(restore()?)
        .build();

    let relic = ItemBuilder::default()
        .name("Might Relic")
        .describe("Increases the holder's Attack by 5% at the end of each turn.")
        .end_turn_action(
            BuffActionBuilder::default()
                .targets_user()
                .raise_attack(5)
                .build()?,
        )
        .build()?;

    Ok(CharacterBuilder::default()
        .name("Warrior")
        .team("a")
        .max_health(100)
        .stats(5, 4, 4)
        .moves(moves)
        .item(relic))
}

fn sword_strike() -> Result<Move, BuildError> {
    MoveBuilder::default()
        .name("Sword Strike")
        .describe(
            "The user swings their sword to inflict damage. This move has increased priority.",
        )
        .max_uses(15)
        .priority(1)
        .success_decreases_linearly_with_uses(100, 25, 10, MoveUseResult::Failure)
        .action(
            DamageActionBuilder::default()
                .base_power(20)
                .user_selects_single_enemy()
                .build()?,
        )
        .build()
}

fn insistent_jab() -> Result<Move, BuildError> {
    MoveBuilder::default()
        .name("Insistent Jab")
        .describe("This attack's base power increases with each consecutive successful use.")
        .max_uses(15)
        .accuracy(100)
        .action(
            DamageActionBuilder::default()
                .base_power_increases_linearly_with_uses(20, 5)
                .user_selects_single_enemy()
                .build()?,
        )
        .build()
}

fn retaliate() -> Result<Move, BuildError> {
    MoveBuilder::default()
        .name("Retaliate")
        .describe("The user deals 1.5x the damage of the last attack it received.")
        .max_uses(5)
        .always_succeeds()
        .action(
            DamageActionBuilder::default()
                .percentage_of_last_received_damage(150)
                .retaliates()
                .build()?,
        )
        .build()
}

fn restore() -> Result<Move, BuildError> {
    MoveBuilder::default()
        .name("Restore")
        .describe(
            "The user drinks a potion to restore 20 health, while also increasing their protect limit by one.",
        )
        .max_uses(10)
        .always_succeeds()
        .action(
            HealActionBuilder::default()
                .amount(20)
                .absolute_healing()
                .targets_user()
                .build()?,
        )
        .action(
            ProtectLimitChangeActionBuilder::default()
                .amount(1)
                .targets_user()
                .build()?,
        )
        .build()
}

fn bard() -> Result<Character, BuildError> {
    let play_music = MoveBuilder::default()
        .name("Play Music")
        .describe("The user shreds on their guitar to inflict 5 damage on all enemies.")
        .max_uses(25)
        .accuracy(100)
        .action(
            DamageActionBuilder::default()
                .absolute_damage(5)
                .targets_enemies()
                .build()?,
        )
        .build()?;

    let capo = ItemBuilder::default()
        .name("Capo")
        .describe("Makes the holder's music better, increasing the power of their attacks by 1.")
        .damage_power_transform(PowerTransform::Add(1))
        .build()?;

    CharacterBuilder::default()
        .name("Bard")
        .team("a")
        .max_health(100)
        .stats(4, 3, 4)
        .moves(MoveSetBuilder::default().with_move(play_music).build())
        .item(capo)
        .automated()
        .build()
}

// ============================================================================
// Team b
// ============================================================================

fn mage() -> Result<Character, BuildError> {
    let magic_missile = MoveBuilder::default()
        .name("Magic Missile")
        .describe("The user fires a spectral missile to inflict 20 damage.")
        .max_uses(15)
        .accuracy(100)
        .action(
            DamageActionBuilder::default()
                .absolute_damage(20)
                .targets_first_enemy()
                .build()?,
        )
        .build()?;

    let lightning_bolt = MoveBuilder::default()
        .name("Lightning Bolt")
        .describe(
            "The user summons a lightning strike to deal damage equal to 30% of the target's health.",
        )
        .max_uses(5)
        .accuracy(70)
        .action(
            DamageActionBuilder::default()
                .percentage_damage(30)
                .targets_first_enemy()
                .build()?,
        )
        .build()?;

    let meditate = MoveBuilder::default()
        .name("Meditate")
        .describe(
            "The user finds inner calm to raise the Defence stat of all characters on their team.",
        )
        .max_uses(10)
        .always_succeeds()
        .action(
            BuffActionBuilder::default()
                .targets_team()
                .raise_defence(10)
                .build()?,
        )
        .build()?;

    let refresh = MoveBuilder::default()
        .name("Refresh")
        .describe("The user regenerates 30% of their max health.")
        .max_uses(10)
        .always_succeeds()
        .action(
            HealActionBuilder::default()
                .amount(30)
                .percentage_healing()
                .targets_user()
                .build()?,
        )
        .build()?;

    let rolling_wave = ItemBuilder::default()
        .name("Rolling Wave")
        .describe("Deals 6 damage to another random character at the start of the holder's turn.")
        .start_turn_action(
            DamageActionBuilder::default()
                .absolute_damage(6)
                .targets_random_other()
                .build()?,
        )
        .build()?;

    CharacterBuilder::default()
        .name("Mage")
        .team("b")
        .max_health(100)
        .stats(6, 3, 5)
        .moves(
            MoveSetBuilder::default()
                .with_move(magic_missile)
                .with_move(lightning_bolt)
                .with_move(meditate)
                .with_move(refresh)
                .build(),
        )
        .item(rolling_wave)
        .automated()
        .build()
}

fn rogue() -> Result<Character, BuildError> {
    let protect = MoveBuilder::default()
        .name("Protect")
        .describe("The user protects themself from the next move.")
        .max_uses(5)
        .priority(2)
        .always_succeeds()
        .action(ProtectActionBuilder::default().targets_first_ally().build()?)
        .build()?;

    let backstab = MoveBuilder::default()
        .name("Backstab")
        .describe("The user slips behind an enemy and stabs them.")
        .max_uses(30)
        .accuracy(90)
        .action(
            DamageActionBuilder::default()
                .base_power(15)
                .user_selects_single_enemy()
                .build()?,
        )
        .build()?;

    // One charge per Protect use, so Backstab is the only move left once both run out
    CharacterBuilder::default()
        .name("Rogue")
        .team("b")
        .max_health(80)
        .stats(3, 2, 3)
        .moves(
            MoveSetBuilder::default()
                .with_move(protect)
                .with_move(backstab)
                .build(),
        )
        .protect_limit(5)
        .automated()
        .build()
}
