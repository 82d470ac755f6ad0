use space_dodger::compute::init_state;
use space_dodger::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);

    let a = Asteroid { x: 1, y: 2, size: 20, active: true };
    assert_eq!(a.clone(), a);
}

#[test]
fn rects_match_entity_geometry() {
    let p = Player { x: 10, y: 20, width: 30, height: 30 };
    assert_eq!(p.rect(), Rect { x: 10, y: 20, w: 30, h: 30 });

    let b = Bullet { x: 5, y: 6, active: true };
    assert_eq!(b.rect(), Rect { x: 5, y: 6, w: BULLET_WIDTH, h: BULLET_HEIGHT });

    // Asteroids are square.
    let a = Asteroid { x: 7, y: -33, size: 33, active: true };
    assert_eq!(a.rect(), Rect { x: 7, y: -33, w: 33, h: 33 });
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.score = 999;
    cloned.asteroids.push(Asteroid { x: 5, y: 5, size: 20, active: true });

    assert_eq!(original.player.x, 305);
    assert_eq!(original.score, 0);
    assert!(original.asteroids.is_empty());
}
