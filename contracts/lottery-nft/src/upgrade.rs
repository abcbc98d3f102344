use crate::*;

#[near]
impl Contract {
    /// Deploys the wasm passed as raw input and runs `migrate` on it.
    pub fn update_contract(&self) -> Promise {
        near_sdk::require!(
            env::attached_deposit().as_yoctonear() == ONE_YOCTO.as_yoctonear(),
            "Attach 1 yoctoNEAR"
        );
        near_sdk::require!(
            env::predecessor_account_id() == self.owner_id,
            "Only contract owner can upgrade"
        );
        let code = env::input().unwrap_or_else(|| env::panic_str("No input"));
        Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("State read failed"));
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
