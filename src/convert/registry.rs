use thiserror::Error;

use crate::{
    convert::{
        rule::{self, ConversionRule, RegionInterface},
        RegistryConfig,
    },
    region::{RealRegion, RegionError},
    roi::{RoiKind, SharedRoi},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("no conversion rule applies to {0:?}")]
    NoApplicableRule(RoiKind),
    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Ordered table of conversion rules. Rules are kept sorted by descending
/// priority; rules of equal priority keep their registration order.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    rules: Vec<ConversionRule>,
    config: RegistryConfig,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let mut registry = Self {
            rules: vec![],
            config,
        };

        for rule in rule::builtin_rules() {
            registry.register(rule);
        }

        registry
    }

    pub fn empty() -> Self {
        Self {
            rules: vec![],
            config: RegistryConfig::default(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn rules(&self) -> &[ConversionRule] {
        &self.rules
    }

    pub fn register(&mut self, rule: ConversionRule) {
        let position = self
            .rules
            .iter()
            .position(|registered| registered.priority < rule.priority)
            .unwrap_or(self.rules.len());

        self.rules.insert(position, rule);
    }

    pub fn can_convert(&self, roi: &SharedRoi, target: RegionInterface) -> bool {
        self.find_rule(roi, target).is_some()
    }

    /// Converts with the first rule that accepts `roi`, whatever its output.
    pub fn convert(&self, roi: &SharedRoi) -> Result<RealRegion, ConvertError> {
        self.convert_to(roi, RegionInterface::Mask)
    }

    pub fn convert_to(
        &self,
        roi: &SharedRoi,
        target: RegionInterface,
    ) -> Result<RealRegion, ConvertError> {
        let Some(rule) = self.find_rule(roi, target) else {
            let kind = roi.borrow().kind();
            log::debug!("no rule converts {:?} to {:?}", kind, target);
            return Err(ConvertError::NoApplicableRule(kind));
        };

        log::debug!("converting with rule `{}` to {:?}", rule.name, target);
        Ok(rule.produce(roi.clone())?)
    }

    /// Like `convert_to`, but treats any failure as "no conversion available".
    pub fn try_convert(&self, roi: &SharedRoi, target: RegionInterface) -> Option<RealRegion> {
        self.convert_to(roi, target)
            .map_err(|err| log::debug!("conversion unavailable: {}", err))
            .ok()
    }

    fn find_rule(&self, roi: &SharedRoi, target: RegionInterface) -> Option<&ConversionRule> {
        let roi = roi.borrow();

        self.rules
            .iter()
            .find(|rule| rule.output.satisfies(target) && rule.matches(&roi, &self.config))
    }
}
