//! Action throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use duelcore::{
    ActionProcessor, AttackTarget, CardInstance, CardKey, CardLibrary, CardPrototype, CardStats,
    CreatureType, Faction, GameState, MatchPhase, PlayerAction, PlayerId,
};

fn board_state() -> (ActionProcessor, GameState) {
    let mut state = GameState::new(42);
    state.phase = MatchPhase::InProgress;

    let proto = CardPrototype::new(
        CardKey::standard(1),
        "Grunt",
        CardStats {
            defense: 1_000_000,
            damage: 1,
            cost: 1,
            faction: Faction::Fire,
            creature_type: CreatureType::Light,
        },
    );

    for seat in 0..2u8 {
        let owner = PlayerId::new(seat);
        for _ in 0..6 {
            let id = state.alloc_instance_id();
            let card = CardInstance::from_prototype(id, &proto, owner);
            state.player_mut(owner).play.push_back(card);
        }
    }

    (ActionProcessor::new(CardLibrary::new()), state)
}

fn bench_attack(c: &mut Criterion) {
    let (proc, state) = board_state();
    let attacker = state.player(PlayerId::new(0)).play[0].instance_id;
    let target = state.player(PlayerId::new(1)).play[0].instance_id;

    c.bench_function("attack_resolution", |b| {
        b.iter(|| {
            let mut s = state.clone();
            let action = PlayerAction::CardAttack {
                player: PlayerId::new(0),
                attacker,
                target: AttackTarget::Creature(target),
            };
            black_box(proc.add_action(&mut s, &action).unwrap());
        });
    });
}

fn bench_turn_cycle(c: &mut Criterion) {
    let (proc, state) = board_state();

    c.bench_function("end_turn_cycle", |b| {
        b.iter(|| {
            let mut s = state.clone();
            for seat in [0u8, 1] {
                let action = PlayerAction::EndTurn {
                    player: PlayerId::new(seat),
                };
                black_box(proc.add_action(&mut s, &action).unwrap());
            }
        });
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let (_, state) = board_state();

    c.bench_function("state_clone", |b| {
        b.iter(|| black_box(state.clone()));
    });
}

criterion_group!(benches, bench_attack, bench_turn_cycle, bench_state_clone);
criterion_main!(benches);
