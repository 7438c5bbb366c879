mod spawner;

pub use spawner::PopupSpawner;
