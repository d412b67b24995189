pub mod fake_surface;
