// DLMM pool creation parameters

use borsh::{BorshDeserialize, BorshSerialize};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationType {
    Slot = 0,
    Timestamp = 1,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CustomizableParams {
    pub active_id: i32,                    // Bin holding the initial price
    pub bin_step: u16,                     // Price step between bins, in bps
    pub base_factor: u16,                  // Base fee multiplier
    pub activation_type: u8,               // ActivationType as u8
    pub has_alpha_vault: bool,
    pub activation_point: Option<u64>,     // None = active immediately
    pub creator_pool_on_off_control: bool,
    pub base_fee_power_factor: u8,
    pub padding: [u8; 62],
}
