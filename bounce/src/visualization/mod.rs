pub mod bounce_vis2d;
