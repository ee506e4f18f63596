//! Orquestador de entrenamiento con cache.
//!
//! `TrainingManager` acumula registros nombre -> líneas, particiona vía el
//! `CacheLedger` en reutilizables y stale, reconstruye los stale (en
//! paralelo con rayon o secuencialmente) y al final recarga *todos* los
//! artefactos desde disco, también los recién entrenados: así la colección
//! devuelta solo contiene artefactos que sobrevivieron un round-trip
//! save/load real, y un bug de serialización se detecta siempre, no solo en
//! el camino "que no debería necesitar recarga".

use std::fs;
use std::mem;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use crate::constants::CACHE_VERSION;
use crate::data::TrainData;
use crate::errors::TrainError;
use crate::ledger::{CacheDecision, CacheLedger};
use crate::trainable::Trainable;

pub struct TrainingManager<T: Trainable> {
    ledger: CacheLedger,
    /// Artefactos clasificados stale, ya construidos con su fingerprint.
    objects_to_train: Vec<T>,
    /// Nombres clasificados reutilizables en el registro.
    reusable: Vec<String>,
    /// Orden de registro; fija el orden de la colección de salida.
    order: Vec<String>,
    train_data: TrainData,
}

impl<T: Trainable + Send> TrainingManager<T> {
    /// Manager con la versión de cache del crate (`CACHE_VERSION`).
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self::with_version(cache_dir, CACHE_VERSION)
    }

    /// Manager con una etiqueta de versión explícita para el fingerprint.
    pub fn with_version(cache_dir: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self { ledger: CacheLedger::new(cache_dir.into(), version),
               objects_to_train: Vec::new(),
               reusable: Vec::new(),
               order: Vec::new(),
               train_data: TrainData::new() }
    }

    /// Registra `name` con sus líneas de entrada y lo clasifica contra la
    /// cache. Volver a registrar un nombre reemplaza el registro anterior,
    /// de modo que cada nombre aparece exactamente una vez en la salida.
    pub fn register(&mut self, name: &str, lines: &[String], reload: bool) {
        self.objects_to_train.retain(|obj| obj.name() != name);
        self.reusable.retain(|n| n != name);

        match self.ledger.classify(name, lines, reload) {
            CacheDecision::Stale(fingerprint) => {
                self.objects_to_train.push(T::with_fingerprint(name, fingerprint));
            }
            CacheDecision::Reusable(_) => self.reusable.push(name.to_string()),
        }
        if !self.order.iter().any(|n| n == name) {
            self.order.push(name.to_string());
        }
        self.train_data.add_lines(name, lines);
    }

    /// Como `register`, leyendo las líneas de un fichero fuente.
    pub fn register_from_source(&mut self,
                                name: &str,
                                source: impl AsRef<Path>,
                                reload: bool)
                                -> Result<(), TrainError> {
        let path = source.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TrainError::Source { path: path.to_path_buf(),
                                                                                 source })?;
        let lines: Vec<String> = raw.lines().map(str::to_string).collect();
        self.register(name, &lines, reload);
        Ok(())
    }

    /// Nombres actualmente clasificados como reutilizables.
    pub fn reusable(&self) -> &[String] {
        &self.reusable
    }

    /// Nombres pendientes de reconstrucción.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.objects_to_train.iter().map(Trainable::name)
    }

    /// Datos de entrenamiento agregados hasta ahora.
    pub fn train_data(&self) -> &TrainData {
        &self.train_data
    }

    /// Reconstruye la partición stale y devuelve la colección completa de
    /// artefactos, recargada uniformemente desde disco en orden de registro.
    ///
    /// En modo secuencial el primer fallo aborta los rebuilds restantes. En
    /// paralelo cada tarea corre hasta el final aunque otra falle; tras la
    /// barrera se devuelve el primer fallo observado y se omite la fase de
    /// recarga. Los artefactos hermanos que sí terminaron quedan
    /// persistidos; los fallidos (y los no intentados, en secuencial) siguen
    /// pendientes en el manager, así que repetir `build` sobre la misma
    /// instancia reintenta exactamente ese conjunto.
    pub fn build(&mut self, debug: bool, sequential: bool) -> Result<Vec<T>, TrainError> {
        fs::create_dir_all(self.ledger.cache_dir()).map_err(TrainError::CacheDirUnavailable)?;

        let mut pending = mem::take(&mut self.objects_to_train);
        debug!("build: {} stale, {} reusable", pending.len(), self.reusable.len());

        let ledger = &self.ledger;
        let cache = self.ledger.cache_dir();
        let data = &self.train_data;

        let outcomes: Vec<Result<(), TrainError>> = if sequential {
            let mut outcomes = Vec::with_capacity(pending.len());
            for obj in pending.iter_mut() {
                let outcome = train_and_save(obj, cache, ledger, data, debug);
                let failed = outcome.is_err();
                outcomes.push(outcome);
                if failed {
                    break;
                }
            }
            outcomes
        } else {
            pending.par_iter_mut()
                   .map(|obj| train_and_save(obj, cache, ledger, data, debug))
                   .collect()
        };

        // Los rebuilds exitosos pasan a reutilizables; los fallidos y los no
        // intentados vuelven a la cola para el siguiente build.
        let mut first_failure: Option<TrainError> = None;
        let mut outcomes = outcomes.into_iter();
        for obj in pending {
            match outcomes.next() {
                Some(Ok(())) => self.reusable.push(obj.name().to_string()),
                Some(Err(err)) => {
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                    self.objects_to_train.push(obj);
                }
                None => self.objects_to_train.push(obj),
            }
        }
        if let Some(first) = first_failure {
            return Err(first);
        }

        // Barrera superada: recarga uniforme de toda la colección.
        let mut collection = Vec::with_capacity(self.order.len());
        for name in &self.order {
            let obj = T::load(name, cache).map_err(|source| TrainError::Reload { name: name.clone(),
                                                                                 source })?;
            collection.push(obj);
        }
        Ok(collection)
    }
}

/// Entrena y persiste un artefacto stale; el registro de fingerprint se
/// escribe solo si `train` y `save` terminaron bien.
fn train_and_save<T: Trainable>(obj: &mut T,
                                cache: &Path,
                                ledger: &CacheLedger,
                                data: &TrainData,
                                debug: bool)
                                -> Result<(), TrainError> {
    let name = obj.name().to_string();
    obj.train(data).map_err(|source| TrainError::Rebuild { name: name.clone(),
                                                           source })?;
    obj.save(cache).map_err(|source| TrainError::Rebuild { name: name.clone(),
                                                           source })?;
    ledger.persist(&name, obj.fingerprint())
          .map_err(|source| TrainError::Rebuild { name: name.clone(),
                                                  source: Box::new(source) })?;
    if debug {
        info!("regenerated '{name}'");
    }
    Ok(())
}
