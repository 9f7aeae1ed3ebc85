pub mod a001_leaderboard;
pub mod a002_score_graph;
pub mod a003_challenge;
pub mod a004_profile;
