use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), LotteryError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(LotteryError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_token_id(token_id: &str) -> Result<(), LotteryError> {
    if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
        return Err(LotteryError::InvalidInput(format!(
            "Token ID must be 1-{} characters",
            MAX_TOKEN_ID_LEN
        )));
    }
    Ok(())
}

pub(crate) fn check_memo(memo: Option<&str>) -> Result<(), LotteryError> {
    if memo.is_some_and(|m| m.len() > MAX_MEMO_LEN) {
        return Err(LotteryError::InvalidInput(format!(
            "Memo exceeds max length of {}",
            MAX_MEMO_LEN
        )));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), LotteryError> {
        if actor_id != &self.owner_id {
            return Err(LotteryError::only_owner("contract owner"));
        }
        Ok(())
    }

    /// Owner-gated state change: exactly 1 yoctoNEAR and predecessor is the contract owner.
    pub(crate) fn check_owner_call(&self) -> Result<(), LotteryError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())
    }
}
