#![no_main]

use libfuzzer_sys::fuzz_target;

use campus::algorithms::best_first::ScoreRule;
use campus::algorithms::best_first::solve;
use campus::problems::campus::CampusAction;
use campus::problems::campus::CampusCost;
use campus::problems::campus::CampusHeuristicPlanar;
use campus::problems::campus::CampusMap;
use campus::problems::campus::CampusProblem;
use campus::problems::campus::CampusSpace;
use campus::problems::campus::CampusState;
use campus::problems::campus::WALL;

// Any text either fails to parse or yields a map that can be searched.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(map) = CampusMap::try_from(s) else {
        return;
    };
    let Some(first) = map.rows()[0].first() else {
        return;
    };
    let symbol = first.symbol();
    if symbol == WALL {
        return;
    }
    // Start and goal share a cell, so the goal is at most one floor away.
    if let Ok(problem) = CampusProblem::new(&map, (symbol, 0), (symbol, 1)) {
        let outcome = solve::<
            CampusHeuristicPlanar,
            CampusProblem,
            CampusSpace,
            CampusState,
            CampusAction,
            CampusCost,
        >(&problem, ScoreRule::Additive);
        assert!(outcome.is_found());
    }
});
