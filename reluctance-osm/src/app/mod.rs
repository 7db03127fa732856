pub mod score_ops;
