use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RonLoadError {
    #[error("failed to read asset: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Generic RON config loader, registered once per asset type with the file
/// extensions that select it.
#[derive(TypePath)]
pub struct RonLoader<T: TypePath> {
    extensions: Vec<&'static str>,
    _marker: PhantomData<T>,
}

impl<T: TypePath> RonLoader<T> {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            _marker: PhantomData,
        }
    }
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + TypePath + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        Ok(ron::de::from_bytes::<T>(&bytes)?)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}
