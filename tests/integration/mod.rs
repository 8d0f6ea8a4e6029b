mod paused_ledger;
mod sale_lifecycle;
