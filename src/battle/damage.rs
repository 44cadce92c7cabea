//! Damage calculation.

use super::moves::MoveDefinition;
use super::rng::BattleRng;
use crate::pokedex::StatBlock;

/// Level every simulated combatant fights at.
pub const BATTLE_LEVEL: u32 = 50;

/// Compute the damage a move deals.
///
/// Pure status moves (power 0) deal nothing. Physical-type moves use
/// attack/defense, the rest use the special pair. The result is scaled by the
/// type-effectiveness multiplier and a variance factor drawn from
/// `[0.85, 1.0]`, then floored, with a minimum of 1 so a damaging move always
/// leaves a mark.
pub fn damage(
    attacker: &StatBlock,
    defender: &StatBlock,
    mv: &MoveDefinition,
    effectiveness: f64,
    level: u32,
    rng: &mut dyn BattleRng,
) -> i64 {
    if mv.power == 0 {
        return 0;
    }

    let (attack_stat, defense_stat) = if mv.element.is_physical() {
        (attacker.attack, defender.defense)
    } else {
        (attacker.special_attack, defender.special_defense)
    };
    // Guard against a zero defense stat in the reference data.
    let defense_stat = defense_stat.max(1);

    let mut raw = (((2.0 * f64::from(level) / 5.0) + 2.0)
        * f64::from(attack_stat)
        * f64::from(mv.power))
        / f64::from(defense_stat)
        / 50.0;

    raw *= effectiveness;

    // Variance factor in [0.85, 1.0].
    raw *= 0.85 + 0.15 * rng.unit();

    (raw.floor() as i64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::moves::MoveCatalog;
    use crate::battle::rng::FixedRng;
    use crate::battle::type_chart::ElementType;

    fn stats(attack: u32, defense: u32, special_attack: u32, special_defense: u32) -> StatBlock {
        StatBlock {
            hp: 100,
            attack,
            defense,
            special_attack,
            special_defense,
            speed: 50,
        }
    }

    #[test]
    fn test_exact_damage_with_full_variance() {
        // ((((2*50/5)+2) * 100 * 40) / 50) / 50 = 35.2 -> floor 35
        let attacker = stats(100, 10, 10, 10);
        let defender = stats(10, 50, 10, 10);
        let mv = MoveDefinition {
            element: ElementType::Normal,
            power: 40,
            status: None,
        };
        let mut rng = FixedRng::new(vec![1.0], vec![]);
        assert_eq!(damage(&attacker, &defender, &mv, 1.0, 50, &mut rng), 35);
    }

    #[test]
    fn test_status_move_deals_zero() {
        let attacker = stats(200, 10, 200, 10);
        let defender = stats(10, 10, 10, 10);
        let catalog = MoveCatalog::new();
        let thunder_wave = catalog.resolve("thunder-wave");
        let mut rng = FixedRng::new(vec![1.0], vec![]);
        assert_eq!(
            damage(&attacker, &defender, &thunder_wave, 1.0, 50, &mut rng),
            0
        );
    }

    #[test]
    fn test_damaging_move_deals_at_least_one() {
        let attacker = stats(1, 1, 1, 1);
        let defender = stats(1, 255, 1, 255);
        let mv = MoveDefinition {
            element: ElementType::Normal,
            power: 1,
            status: None,
        };
        let mut rng = FixedRng::new(vec![0.0], vec![]);
        assert_eq!(damage(&attacker, &defender, &mv, 0.25, 50, &mut rng), 1);
        // Even a type immunity cannot push a damaging move below 1.
        assert_eq!(damage(&attacker, &defender, &mv, 0.0, 50, &mut rng), 1);
    }

    #[test]
    fn test_physical_special_stat_split() {
        // Same numbers on both sides; only the stat pair chosen differs.
        let attacker = stats(100, 10, 20, 10);
        let defender = stats(10, 50, 10, 200);
        let mut rng = FixedRng::new(vec![1.0], vec![]);

        let physical = MoveDefinition {
            element: ElementType::Ground,
            power: 60,
            status: None,
        };
        let special = MoveDefinition {
            element: ElementType::Water,
            power: 60,
            status: None,
        };

        // Physical: 22 * 100 * 60 / 50 / 50 = 52.8 -> 52
        assert_eq!(damage(&attacker, &defender, &physical, 1.0, 50, &mut rng), 52);
        // Special: 22 * 20 * 60 / 200 / 50 = 2.64 -> 2
        assert_eq!(damage(&attacker, &defender, &special, 1.0, 50, &mut rng), 2);
    }

    #[test]
    fn test_variance_scales_damage_down() {
        let attacker = stats(100, 10, 10, 10);
        let defender = stats(10, 50, 10, 10);
        let mv = MoveDefinition {
            element: ElementType::Normal,
            power: 40,
            status: None,
        };
        // Minimum variance: 35.2 * 0.85 = 29.92 -> 29
        let mut rng = FixedRng::new(vec![0.0], vec![]);
        assert_eq!(damage(&attacker, &defender, &mv, 1.0, 50, &mut rng), 29);
    }

    #[test]
    fn test_effectiveness_multiplies() {
        let attacker = stats(100, 10, 10, 10);
        let defender = stats(10, 50, 10, 10);
        let mv = MoveDefinition {
            element: ElementType::Normal,
            power: 40,
            status: None,
        };
        let mut rng = FixedRng::new(vec![1.0], vec![]);
        // 35.2 * 2 = 70.4 -> 70
        assert_eq!(damage(&attacker, &defender, &mv, 2.0, 50, &mut rng), 70);
        // 35.2 * 0.5 = 17.6 -> 17
        assert_eq!(damage(&attacker, &defender, &mv, 0.5, 50, &mut rng), 17);
    }
}
